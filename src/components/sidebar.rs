//! Sidebar Component
//!
//! Left column with the session username, navigation and the team shortcuts.

use leptos::prelude::*;

use coopera_core::Route;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let nav_class = move |route: Route| {
        if ctx.route.get() == route { "nav-link active" } else { "nav-link" }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <span class="brand">"Coopera"</span>
                <span class="sidebar-user">
                    {move || ctx.username.get().map(|name| format!("@{}", name)).unwrap_or_default()}
                </span>
            </div>

            <nav class="sidebar-nav">
                <a class=move || nav_class(Route::Teams) href=Route::Teams.path()>"Teams"</a>
                <a class=move || nav_class(Route::Stats) href=Route::Stats.path()>"Statistics"</a>
            </nav>

            <div class="sidebar-teams">
                <For
                    each=move || store.teams().get()
                    key=|team| (team.id, team.name.clone())
                    children=move |team| {
                        let board = Route::Board(team.id);
                        view! {
                            <a class=move || nav_class(board) href=board.path()>{team.name}</a>
                        }
                    }
                />
            </div>

            <button class="logout-btn" on:click=move |_| ctx.logout()>"Log out"</button>
        </aside>
    }
}
