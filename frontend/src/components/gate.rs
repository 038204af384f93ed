//! Route gate for token-protected pages.

use cartel::submission::MSG_LOGIN_REQUIRED;
use cartel::{check_route, guard_admin_user, GuardDecision, Notification, Route};
use leptos::*;
use leptos_router::Redirect;

use crate::services::session_store;
use crate::types::use_app_state;

/// Render `children` only when the stored session may enter `route`.
///
/// The curation dashboard also requires an admin user; anyone else is
/// sent home.
#[component]
pub fn RouteGate(route: Route, children: ChildrenFn) -> impl IntoView {
    let store = session_store();
    let decision = match check_route(route, &store) {
        GuardDecision::Allow if route == Route::Admin => guard_admin_user(&store),
        other => other,
    };

    match decision {
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(path) => {
            log::info!("🔒 {} requires a session, redirecting to {}", route.path(), path);
            if route == Route::SubmitArtwork {
                use_app_state()
                    .flash
                    .set(Some(Notification::error(MSG_LOGIN_REQUIRED)));
            }
            view! { <Redirect path=path/> }.into_view()
        }
    }
}
