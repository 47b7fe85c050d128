//! Delete Confirm Button Component
//!
//! Two-step delete for cards, teams and members: a × that turns into
//! "Delete <target>?" with confirm and cancel.

use leptos::prelude::*;

/// Inline delete confirmation
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button (e.g. "task-delete-btn")
/// * `target` - What is being deleted, shown in the prompt and the accessible label
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] target: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let label = format!("Delete {}", target);
    let prompt = format!("Delete {}?", target);

    // Clicks stay inside the button so the card or row underneath does not react
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
    };

    view! {
        {move || if confirming.get() {
            view! {
                <span class="delete-confirm" role="group" aria-label=prompt.clone()>
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Confirm" on:click=confirm>"✓"</button>
                    <button class="cancel-btn" title="Cancel" on:click=cancel>"✗"</button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title=label.clone()
                    aria-label=label.clone()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }.into_any()
        }}
    }
}
