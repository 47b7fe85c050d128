//! Notice Banner Component
//!
//! Shows the latest error from any view and hides it after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[component]
pub fn Notice() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(message) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                // A newer notice keeps its own timer
                if ctx.notice.get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_notice();
                }
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice error" role="alert">
                <span>{message}</span>
                <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
