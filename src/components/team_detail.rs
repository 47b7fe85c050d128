//! Team Detail Component
//!
//! Member list of one team. Managers can rename the team, invite users,
//! change roles and remove members.

use leptos::prelude::*;
use leptos::task::spawn_local;

use coopera_core::dto::{UpdateMembershipRequest, UpdateTeamRequest};
use coopera_core::model::{InviteDraft, Member, MemberRole, TeamId};
use coopera_core::{permissions, ApiError, Route};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::hooks::TeamsHook;
use crate::store::{
    store_remove_member, store_team, store_update_team, store_upsert_member, use_app_store, AppStateStoreFields,
};

/// Invite form, managers only
#[component]
fn InviteForm(team_id: TeamId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    let (username, set_username) = signal(String::new());
    let (role, set_role) = signal(MemberRole::Member);

    let on_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let draft = InviteDraft { username: username.get(), role: role.get() };
        let request = match draft.to_create_request(team_id, user_id) {
            Ok(request) => request,
            Err(err) => {
                ctx.notify_error("Could not invite", &err);
                return;
            }
        };
        let api = ctx.api();
        spawn_local(async move {
            match teams.state.mutate(api.create_membership(&request)).await {
                Ok(member) => {
                    store_upsert_member(&store, team_id, member);
                    let _ = set_username.try_set(String::new());
                }
                Err(err) => ctx.notify_error("Could not invite", &err),
            }
        });
    };

    view! {
        <form class="invite-form" on:submit=on_invite>
            <input
                type="text"
                placeholder="@telegram_username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                if let Some(parsed) = MemberRole::parse(&event_target_value(&ev)) {
                    set_role.set(parsed);
                }
            }>
                <option value="member" selected={move || role.get() == MemberRole::Member}>"Member"</option>
                <option value="manager" selected={move || role.get() == MemberRole::Manager}>"Manager"</option>
            </select>
            <button type="submit">"Invite"</button>
        </form>
    }
}

/// Inline rename, managers only
#[component]
fn RenameForm(team_id: TeamId, current_name: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    let (name, set_name) = signal(current_name);

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let new_name = name.get().trim().to_string();
        if new_name.is_empty() {
            ctx.notify_error("Could not rename team", &ApiError::validation("Team name is required"));
            return;
        }
        let api = ctx.api();
        let request = UpdateTeamRequest { team_id, current_user_id: user_id, name: new_name };
        spawn_local(async move {
            match teams.state.mutate(api.update_team(&request)).await {
                Ok(team) => store_update_team(&store, team),
                Err(err) => ctx.notify_error("Could not rename team", &err),
            }
        });
    };

    view! {
        <form class="rename-form" on:submit=on_rename>
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"Rename"</button>
        </form>
    }
}

/// One member row
#[component]
fn MemberRow(team_id: TeamId, member: Member, can_manage: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let teams = expect_context::<TeamsHook>();

    let member_id = member.member_id;
    let current_role = member.role;
    let display_name = format!("@{}", member.username);
    let remove_target = display_name.clone();

    let change_role = move |role: MemberRole| {
        if role == current_role {
            return;
        }
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let api = ctx.api();
        let updated = Member { role, ..member.clone() };
        spawn_local(async move {
            let request = UpdateMembershipRequest::new(member_id, role, user_id);
            match teams.state.mutate(api.update_membership(&request)).await {
                Ok(()) => store_upsert_member(&store, team_id, updated),
                Err(err) => ctx.notify_error("Could not change role", &err),
            }
        });
    };

    let on_remove = Callback::new(move |_: ()| {
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match teams.state.mutate(api.delete_membership(member_id, user_id)).await {
                Ok(()) => store_remove_member(&store, team_id, member_id),
                Err(err) => ctx.notify_error("Could not remove member", &err),
            }
        });
    });

    view! {
        <li class="member-row">
            <span class="member-name">{display_name}</span>
            {if can_manage {
                view! {
                    <select class="member-role" on:change=move |ev| {
                        if let Some(role) = MemberRole::parse(&event_target_value(&ev)) {
                            change_role(role);
                        }
                    }>
                        <option value="member" selected={current_role == MemberRole::Member}>"Member"</option>
                        <option value="manager" selected={current_role == MemberRole::Manager}>"Manager"</option>
                    </select>
                    <DeleteConfirmButton button_class="member-remove-btn" target=remove_target on_confirm=on_remove />
                }.into_any()
            } else {
                view! { <span class="member-role">{current_role.as_str()}</span> }.into_any()
            }}
        </li>
    }
}

#[component]
pub fn TeamDetail(team_id: TeamId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let team = Memo::new(move |_| store_team(&store, team_id));
    let can_manage = move || {
        let username = ctx.username.get().unwrap_or_default();
        team.with(|t| t.as_ref().is_some_and(|t| permissions::can_manage_team(t, &username)))
    };

    view! {
        <div class="team-detail-page">
            {move || match team.get() {
                None => view! { <p class="empty-message">"Team not found"</p> }.into_any(),
                Some(t) => {
                    let manage = can_manage();
                    view! {
                        <header class="team-header">
                            <h1>{t.name.clone()}</h1>
                            <a class="team-board-link" href=Route::Board(team_id).path()>"Open board"</a>
                        </header>
                        {manage.then(|| view! { <RenameForm team_id=team_id current_name=t.name.clone() /> })}
                        <h2>{format!("Members ({})", t.members.len())}</h2>
                        <ul class="member-list">
                            {t.members.iter().cloned().map(|member| view! {
                                <MemberRow team_id=team_id member=member can_manage=manage />
                            }).collect_view()}
                        </ul>
                        {manage.then(|| view! { <InviteForm team_id=team_id /> })}
                    }.into_any()
                }
            }}
        </div>
    }
}
