//! Login Page Component
//!
//! Finds the user by Telegram username, registering them on first visit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use coopera_core::dto::CreateUserRequest;
use coopera_core::model::User;
use coopera_core::{ApiClient, ApiError, ApiResult, Route};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

async fn find_or_register(api: ApiClient, username: String, telegram_id: String) -> ApiResult<User> {
    match api.find_user_by_username(&username).await {
        Err(err) if err.is_not_found() => {
            let telegram_id = telegram_id
                .trim()
                .parse::<i64>()
                .map_err(|_| ApiError::validation("New users need a numeric Telegram id"))?;
            api.create_user(&CreateUserRequest { telegram_id, username }).await
        }
        found => found,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (telegram_id, set_telegram_id) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().trim_start_matches('@').to_string();
        if name.is_empty() {
            set_error.set(Some("Enter your Telegram username".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        let api = ctx.api();
        let telegram = telegram_id.get();
        spawn_local(async move {
            match find_or_register(api, name, telegram).await {
                Ok(user) => {
                    ctx.login(&user.username);
                    store.user().set(Some(user));
                    ctx.navigate(Route::Teams);
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Coopera"</h1>
            <p class="login-hint">"Sign in with your Telegram account"</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="@username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Telegram id (first login only)"
                    prop:value=move || telegram_id.get()
                    on:input=move |ev| set_telegram_id.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </div>
    }
}
