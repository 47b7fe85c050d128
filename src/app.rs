//! Coopera Frontend App
//!
//! Route shell: sidebar, notice banner and the page for the current hash.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use log::debug;
use reactive_stores::Store;

use coopera_core::{guard, Route};

use crate::components::{KanbanBoard, LoginPage, Notice, Sidebar, StatsPanel, TeamDetail, TeamList};
use crate::context::{resolve_api_config, AppContext};
use crate::hooks::{use_current_user, use_teams};
use crate::store::AppState;

/// Route from the current location hash
fn current_hash_route() -> Route {
    let hash = web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default();
    Route::parse(&hash)
}

/// Keep `route` in sync with back/forward and link clicks
fn bind_hashchange(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;

    let on_hashchange = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(move |_ev: web_sys::HashChangeEvent| {
        ctx.sync_route(current_hash_route());
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = AppContext::new(resolve_api_config(), current_hash_route());
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let profile = use_current_user();
    provide_context(use_teams());

    bind_hashchange(ctx);

    // Pages that need a session bounce to login, and login bounces home once logged in
    let page = Memo::new(move |_| guard(ctx.route.get(), ctx.username.get().is_some()));
    Effect::new(move |_| {
        let resolved = page.get();
        if resolved != ctx.route.get_untracked() {
            debug!("[ROUTE] redirecting to {}", resolved.path());
            ctx.navigate(resolved);
        }
    });

    view! {
        <div class="app-layout">
            <Show when=move || ctx.username.get().is_some()>
                <Sidebar />
            </Show>

            <main class="main-content">
                <Notice />

                {move || profile.error.get().map(|err| view! {
                    <div class="inline-error">
                        <span>{format!("Could not load your profile: {}", err)}</span>
                        <button on:click=move |_| ctx.logout()>"Log out"</button>
                    </div>
                })}

                {move || match page.get() {
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Teams => view! { <TeamList /> }.into_any(),
                    Route::Team(team_id) => view! { <TeamDetail team_id=team_id /> }.into_any(),
                    Route::Board(team_id) => view! { <KanbanBoard team_id=team_id /> }.into_any(),
                    Route::Stats => view! { <StatsPanel /> }.into_any(),
                    Route::NotFound => view! {
                        <div class="not-found">
                            <h1>"Page not found"</h1>
                            <a href=Route::Teams.path()>"Back to teams"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
