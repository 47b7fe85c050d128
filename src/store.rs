//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds what every page shares: the current user and their teams.
//! Task lists are not here; each board owns its own `TaskBoard`.

use leptos::prelude::*;
use reactive_stores::Store;

use coopera_core::model::{Member, MemberId, Team, TeamId, User};
use coopera_core::MemberIndex;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user (None until loaded)
    pub user: Option<User>,
    /// Teams the user belongs to, with members
    pub teams: Vec<Team>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Look up a team by ID (tracked)
pub fn store_team(store: &AppStore, team_id: TeamId) -> Option<Team> {
    store.teams().read().iter().find(|t| t.id == team_id).cloned()
}

/// Add a team to the store
pub fn store_add_team(store: &AppStore, team: Team) {
    store.teams().write().push(team);
}

/// Update a team in the store by ID
pub fn store_update_team(store: &AppStore, updated_team: Team) {
    if let Some(team) = store.teams().write().iter_mut().find(|t| t.id == updated_team.id) {
        *team = updated_team;
    }
}

/// Remove a team from the store by ID
pub fn store_remove_team(store: &AppStore, team_id: TeamId) {
    store.teams().write().retain(|team| team.id != team_id);
}

/// Insert or replace a member of one team
pub fn store_upsert_member(store: &AppStore, team_id: TeamId, member: Member) {
    if let Some(team) = store.teams().write().iter_mut().find(|t| t.id == team_id) {
        match team.members.iter_mut().find(|m| m.member_id == member.member_id) {
            Some(slot) => *slot = member,
            None => team.members.push(member),
        }
    }
}

/// Remove a member from one team
pub fn store_remove_member(store: &AppStore, team_id: TeamId, member_id: MemberId) {
    if let Some(team) = store.teams().write().iter_mut().find(|t| t.id == team_id) {
        team.members.retain(|m| m.member_id != member_id);
    }
}

/// Current user's member id in every team (tracked)
pub fn store_member_index(store: &AppStore) -> MemberIndex {
    match &*store.user().read() {
        Some(user) => MemberIndex::for_user(&user.username, store.teams().read().iter()),
        None => MemberIndex::default(),
    }
}
