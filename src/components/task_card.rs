//! Task Card Component
//!
//! A draggable card on the kanban board.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use coopera_core::model::{Column, Task, TaskId};
use coopera_core::permissions::CardAccess;

use crate::components::DeleteConfirmButton;

#[component]
pub fn TaskCard(
    task: Task,
    dnd: DndSignals<Column>,
    /// Display name of the assignee, if any
    #[prop(into)] assignee: Signal<Option<String>>,
    /// Re-evaluated once the team and user have loaded
    #[prop(into)] access: Signal<CardAccess>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id;
    let on_mousedown = make_on_mousedown(dnd, id);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let completed = task.is_completed();

    let card_class = move || {
        let mut c = String::from("task-card");
        if access.get().can_move { c.push_str(" draggable"); }
        if completed { c.push_str(" completed"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    let edit_task = task.clone();
    let on_click = move |_: web_sys::MouseEvent| {
        // The click that ends a drag is not an edit
        if access.get_untracked().can_edit && !dnd.drag_just_ended_read.get_untracked() {
            on_edit.run(edit_task.clone());
        }
    };
    let title = task.title.clone();

    view! {
        <div
            class=card_class
            on:mousedown=move |ev: web_sys::MouseEvent| if access.get_untracked().can_move { on_mousedown(ev) }
            on:click=on_click
        >
            <div class="task-card-header">
                <span class="task-title">{task.title.clone()}</span>
                <span class="task-points">{format!("{} pt", task.points)}</span>
            </div>
            {(!task.description.is_empty()).then(|| view! {
                <p class="task-description">{task.description.clone()}</p>
            })}
            <div class="task-card-footer">
                <span class="task-assignee">
                    {move || assignee.get().map(|name| format!("@{}", name)).unwrap_or_else(|| "Unassigned".to_string())}
                </span>
                <span class="task-updated">{task.updated_at.format("%b %d").to_string()}</span>
                {move || access.get().can_delete.then(|| view! {
                    <DeleteConfirmButton
                        button_class="task-delete-btn"
                        target=title.clone()
                        on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                    />
                })}
            </div>
        </div>
    }
}
