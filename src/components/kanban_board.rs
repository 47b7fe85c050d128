//! Kanban Board Component
//!
//! Four status columns for one team's tasks. Cards are dragged between
//! columns with leptos-dragdrop; a drop is applied to the local board at once
//! and rolled back if the server rejects it.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use coopera_core::model::{Column, Task, TaskId, Team, TeamId, User};
use coopera_core::permissions::{self, CardAccess};
use coopera_core::{move_task, ApiError, ApiResult, Route, TaskBoard};

use crate::components::{TaskCard, TaskForm, TaskFormMode};
use crate::context::use_app_context;
use crate::hooks::{use_team_tasks, TasksHook};
use crate::store::{store_team, use_app_store, AppStateStoreFields};

/// Username and id of the logged-in user, untracked
fn current_user(user: Option<User>) -> Option<(String, u64)> {
    user.map(|u| (u.username, u.id))
}

/// One column of the board, also a drop zone
#[component]
fn KanbanColumn(
    column: Column,
    dnd: DndSignals<Column>,
    tasks: TasksHook,
    team: Memo<Option<Team>>,
    counts: Memo<[(Column, usize); 4]>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let store = use_app_store();

    let on_mouseenter = make_on_zone_mouseenter(dnd, column);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drag_over = move || dnd.drag_over_read.get() == Some(column);
    let column_class = move || {
        let mut c = String::from("kanban-column");
        if dnd.dragging_id_read.get().is_some() { c.push_str(" drop-enabled"); }
        if is_drag_over() { c.push_str(" drag-over"); }
        c
    };

    let cards = move || tasks.board.with(|b: &TaskBoard| b.column(column).into_iter().cloned().collect::<Vec<_>>());
    let count = move || {
        counts.with(|all| all.iter().find(|(c, _)| *c == column).map(|(_, n)| *n).unwrap_or(0))
    };

    view! {
        <section class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <header class="kanban-column-header">
                <span class="kanban-column-title">{column.title()}</span>
                <span class="kanban-column-count">{count}</span>
            </header>
            <div class="kanban-column-cards">
                <For
                    each=cards
                    key=|task| (task.id, task.updated_at, task.title.clone(), task.points, task.assigned_to_member)
                    children=move |task| {
                        let assigned_to = task.assigned_to_member;
                        let assignee = Signal::derive(move || {
                            let member_id = assigned_to?;
                            team.with(|t| t.as_ref().and_then(|t| t.member(member_id)).map(|m| m.username.clone()))
                        });
                        let access_task = task.clone();
                        let access = Signal::derive(move || {
                            let user = store.user().with(|u| u.as_ref().map(|u| (u.username.clone(), u.id)));
                            team.with(|t| {
                                CardAccess::resolve(
                                    t.as_ref(),
                                    user.as_ref().map(|(name, id)| (name.as_str(), *id)),
                                    &access_task,
                                )
                            })
                        });
                        view! {
                            <TaskCard
                                task=task
                                dnd=dnd
                                assignee=assignee
                                access=access
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
pub fn KanbanBoard(team_id: TeamId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let tasks = use_team_tasks(team_id);
    let dnd = create_dnd_signals::<Column>();
    let (form_mode, set_form_mode) = signal(None::<TaskFormMode>);

    let team = Memo::new(move |_| store_team(&store, team_id));
    let counts = Memo::new(move |_| tasks.board.with(|b| b.column_counts()));

    // Drop: optimistic move, rollback inside move_task on failure
    bind_global_mouseup(dnd, move |task_id, to| {
        let Some(task) = tasks.board.with_untracked(|b| b.get(task_id).cloned()) else {
            return;
        };
        let Some(from) = task.column() else {
            return;
        };
        let Some((username, user_id)) = current_user(store.user().get_untracked()) else {
            return;
        };
        let allowed = team
            .get_untracked()
            .is_some_and(|t| permissions::can_move_task(&t, &username, user_id, &task));
        if !allowed {
            ctx.notify_error("Could not move task", &ApiError::validation("You cannot move this task"));
            return;
        }

        let handle = tasks.handle();
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = move_task(&handle, &api, user_id, task_id, from, to, Utc::now()).await {
                ctx.notify_error("Could not move task", &err);
            }
        });
    });

    let on_edit = Callback::new(move |task: Task| set_form_mode.set(Some(TaskFormMode::Edit(task))));

    let on_delete = Callback::new(move |task_id: TaskId| {
        let Some((_, user_id)) = current_user(store.user().get_untracked()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match tasks.state.mutate(api.delete_task(task_id, user_id)).await {
                Ok(()) => {
                    let _ = tasks.board.try_update(|b| b.remove(task_id));
                }
                Err(err) => ctx.notify_error("Could not delete task", &err),
            }
        });
    });

    // Create and edit are confirmed by the server before touching the board
    let on_submit = Callback::new(move |draft: coopera_core::model::TaskDraft| {
        let Some((_, user_id)) = current_user(store.user().get_untracked()) else {
            return;
        };
        let mode = form_mode.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let saved: ApiResult<Task> = async {
                match &mode {
                    Some(TaskFormMode::Edit(task)) => {
                        let request = draft.to_update_request(task.id, user_id)?;
                        tasks.state.mutate(api.update_task(&request)).await
                    }
                    _ => {
                        let request = draft.to_create_request(team_id, user_id)?;
                        tasks.state.mutate(api.create_task(&request)).await
                    }
                }
            }
            .await;

            match saved {
                Ok(task) => {
                    let _ = tasks.board.try_update(|b| b.add(task));
                    let _ = set_form_mode.try_set(None);
                }
                Err(err) => ctx.notify_error("Could not save task", &err),
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| set_form_mode.set(None));

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>{move || team.get().map(|t| t.name).unwrap_or_else(|| format!("Team #{}", team_id))}</h1>
                <a class="team-link" href=Route::Team(team_id).path()>"Members"</a>
                <button class="refresh-btn" on:click=move |_| tasks.refetch()>"Refresh"</button>
                <button class="new-task-btn" on:click=move |_| set_form_mode.set(Some(TaskFormMode::Create))>"New task"</button>
                {move || tasks.state.loading.get().then(|| view! { <span class="loading">"Syncing..."</span> })}
            </header>

            {move || tasks.state.error.get().map(|err| view! {
                <div class="inline-error">
                    <span>{format!("Last request failed: {}", err)}</span>
                    <button on:click=move |_| tasks.refetch()>"Retry"</button>
                </div>
            })}

            <div class="kanban-board">
                {Column::ALL.into_iter().map(|column| view! {
                    <KanbanColumn
                        column=column
                        dnd=dnd
                        tasks=tasks
                        team=team
                        counts=counts
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }).collect_view()}
            </div>

            {move || form_mode.get().map(|mode| {
                let members = team.get_untracked().map(|t| t.members).unwrap_or_default();
                view! {
                    <TaskForm mode=mode members=members on_submit=on_submit on_cancel=on_cancel />
                }
            })}
        </div>
    }
}
