//! Task Form Component
//!
//! Modal form for creating or editing a task.

use leptos::prelude::*;

use coopera_core::model::{Member, MemberId, Task, TaskDraft};

/// What the form is doing
#[derive(Clone, Debug, PartialEq)]
pub enum TaskFormMode {
    Create,
    Edit(Task),
}

#[component]
pub fn TaskForm(
    mode: TaskFormMode,
    members: Vec<Member>,
    #[prop(into)] on_submit: Callback<TaskDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = match &mode {
        TaskFormMode::Create => TaskDraft::default(),
        TaskFormMode::Edit(task) => TaskDraft::from_task(task),
    };
    let heading = match &mode {
        TaskFormMode::Create => "New task",
        TaskFormMode::Edit(_) => "Edit task",
    };

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (points, set_points) = signal(initial.points.to_string());
    let (assignee, set_assignee) = signal(initial.assigned_to_member);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Unparseable points become 0 and fail draft validation
        let draft = TaskDraft {
            title: title.get(),
            description: description.get(),
            points: points.get().trim().parse().unwrap_or(0),
            assigned_to_member: assignee.get(),
        };
        on_submit.run(draft);
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="task-form modal" on:submit=submit on:click=|ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Points"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || points.get()
                        on:input=move |ev| set_points.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Assignee"
                    <select on:change=move |ev| {
                        set_assignee.set(event_target_value(&ev).parse::<MemberId>().ok().filter(|id| *id != 0));
                    }>
                        <option value="0" selected={move || assignee.get().is_none()}>"Unassigned"</option>
                        {members.into_iter().map(|member| {
                            let id = member.member_id;
                            view! {
                                <option value=id.to_string() selected={move || assignee.get() == Some(id)}>
                                    {format!("@{}", member.username)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit">"Save"</button>
                </div>
            </form>
        </div>
    }
}
