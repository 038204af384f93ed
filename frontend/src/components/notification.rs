//! Alert banner for notifications and flash messages.

use cartel::{Notification, Severity};
use leptos::*;

/// Shows `notification` while it is `Some`. The close button calls
/// `on_dismiss`.
#[component]
pub fn NotificationBanner(
    #[prop(into)] notification: Signal<Option<Notification>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        {move || notification.get().map(|n| {
            let class = match n.severity {
                Severity::Success => "alert alert-success",
                Severity::Error => "alert alert-error",
            };
            view! {
                <div class=class role="alert">
                    <span>{n.message}</span>
                    <button class="alert-close" on:click=move |_| on_dismiss.call(())>"✕"</button>
                </div>
            }
        })}
    }
}

/// Inline error line under a form, hidden while `error` is `None`.
#[component]
pub fn InlineError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| view! { }>
            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}
