//! Top navigation bar.
//!
//! Links depend on the session: visitors get login/register, logged-in
//! users get artwork submission, admins also get the dashboards.

use leptos::*;
use leptos_router::*;

use crate::services::api;
use crate::types::use_app_state;
use crate::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();
    let (menu_open, set_menu_open) = create_signal(false);
    let navigate = use_navigate();

    let logged_in = move || state.user.with(|u| u.is_some());
    let is_admin = move || state.user.with(|u| u.as_ref().map(|u| u.is_admin).unwrap_or(false));
    let username = move || state.user.with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    let on_logout = Callback::new(move |_: ()| {
        if let Err(e) = api::logout() {
            log::error!("❌ Logout failed: {}", e);
        }
        state.user.set(None);
        set_menu_open.set(false);
        log::info!("👋 Logged out");
        navigate("/", Default::default());
    });

    view! {
        <header class="navbar">
            <A href="/" class="navbar-brand">{APP_NAME}</A>

            <nav class="navbar-links">
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <A href="/connexion" class="nav-button">"Se connecter"</A>
                        <A href="/inscription" class="nav-button">"S'inscrire"</A>
                    }
                >
                    <A href="/soumettre" class="nav-button">"Soumettre une œuvre"</A>
                    <Show when=is_admin fallback=|| view! { }>
                        <A href="/admin" class="nav-button">"Administration"</A>
                        <A href="/admin/artists" class="nav-button">"Artistes"</A>
                    </Show>

                    <div class="account-menu">
                        <button
                            class="account-button"
                            aria-label="compte de l'utilisateur"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "👤 " {username}
                        </button>
                        <Show when=move || menu_open.get() fallback=|| view! { }>
                            <div class="account-dropdown">
                                <button class="menu-item" on:click=move |_| on_logout.call(())>
                                    "Se déconnecter"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
