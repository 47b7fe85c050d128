//! Team List Component
//!
//! Teams of the current user with a create form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use coopera_core::model::{Team, TeamDraft};
use coopera_core::{permissions, Route};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::hooks::TeamsHook;
use crate::store::{store_add_team, store_remove_team, store_team, use_app_store, AppStateStoreFields};

/// New team input
#[component]
fn TeamAddForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let request = match (TeamDraft { name: new_name.get() }).to_create_request(user_id) {
            Ok(request) => request,
            Err(err) => {
                ctx.notify_error("Could not create team", &err);
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match teams.state.mutate(api.create_team(&request)).await {
                Ok(team) => {
                    store_add_team(&store, team);
                    let _ = set_new_name.try_set(String::new());
                }
                Err(err) => ctx.notify_error("Could not create team", &err),
            }
        });
    };

    view! {
        <form class="team-add-form" on:submit=on_add>
            <input
                type="text"
                placeholder="New team name..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>
    }
}

/// One team row
#[component]
fn TeamRow(team: Team) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    let team_id = team.id;
    // Live copy, so role and member changes reach an existing row
    let current = Memo::new(move |_| store_team(&store, team_id));
    let is_manager = move || {
        let username = ctx.username.get().unwrap_or_default();
        current.with(|t| t.as_ref().is_some_and(|t| permissions::can_manage_team(t, &username)))
    };
    let meta = move || {
        let username = ctx.username.get().unwrap_or_default();
        current.with(|t| match t {
            Some(t) => {
                let role = t.role_of(&username).map(|r| r.as_str()).unwrap_or("-");
                format!("{} · {} members", role, t.members.len())
            }
            None => String::new(),
        })
    };
    let name = team.name.clone();

    let on_delete = Callback::new(move |_: ()| {
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match teams.state.mutate(api.delete_team(team_id, user_id)).await {
                Ok(()) => store_remove_team(&store, team_id),
                Err(err) => ctx.notify_error("Could not delete team", &err),
            }
        });
    });

    view! {
        <li class="team-row">
            <a class="team-name" href=Route::Team(team_id).path()>{team.name.clone()}</a>
            <span class="team-meta">{meta}</span>
            <a class="team-board-link" href=Route::Board(team_id).path()>"Board"</a>
            {move || is_manager().then(|| view! {
                <DeleteConfirmButton button_class="team-delete-btn" target=name.clone() on_confirm=on_delete />
            })}
        </li>
    }
}

#[component]
pub fn TeamList() -> impl IntoView {
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    view! {
        <div class="team-list-page">
            <h1>"Teams"</h1>

            <TeamAddForm />

            {move || teams.state.error.get().map(|err| view! {
                <div class="inline-error">
                    <span>{format!("Could not load teams: {}", err)}</span>
                    <button on:click=move |_| teams.refetch()>"Retry"</button>
                </div>
            })}

            <ul class="team-list">
                <For
                    each=move || store.teams().get()
                    key=|team| (team.id, team.name.clone(), team.members.len())
                    children=move |team| view! { <TeamRow team=team /> }
                />
            </ul>

            {move || (store.teams().with(|t| t.is_empty()) && !teams.state.loading.get()).then(|| view! {
                <div class="empty-message">"No teams yet. Create one to get started."</div>
            })}
            {move || teams.state.loading.get().then(|| view! { <div class="loading">"Loading..."</div> })}
        </div>
    }
}
