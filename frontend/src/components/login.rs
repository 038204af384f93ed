//! Login page, mounted on both `/connexion` and `/admin/login`.

use cartel::submission::{landing_route, LoginForm, MSG_LOGIN_FAILED};
use cartel::Route;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;

use crate::components::{bind_text, InlineError, NotificationBanner, TextField};
use crate::services::api;
use crate::types::use_app_state;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let location = use_location();
    let flash = create_rw_signal(state.take_flash());

    let form = create_rw_signal(LoginForm::default());
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let is_admin_login = move || location.pathname.get() == Route::AdminLogin.path();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = match form.with(LoginForm::credentials) {
            Ok(c) => c,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::login(&credentials).await {
                Ok(session) => {
                    let target = landing_route(&session.user).path();
                    state.user.set(Some(session.user));
                    navigate(&target, Default::default());
                }
                Err(e) => set_error.set(Some(e.user_message(MSG_LOGIN_FAILED))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="container form-container">
            <h1>{move || if is_admin_login() { "Connexion administrateur" } else { "Connexion" }}</h1>

            <NotificationBanner
                notification=flash
                on_dismiss=Callback::new(move |_: ()| flash.set(None))
            />
            <InlineError error=error/>

            <form class="form" on:submit=on_submit>
                <TextField
                    label="Adresse email"
                    input_type="email"
                    required=true
                    bind=bind_text(form, |f| &f.email, |f| &mut f.email)
                />
                <TextField
                    label="Mot de passe"
                    input_type="password"
                    required=true
                    bind=bind_text(form, |f| &f.password, |f| &mut f.password)
                />
                <button type="submit" class="primary-button" disabled=move || busy.get()>
                    {move || if busy.get() { "⏳ Connexion..." } else { "Se connecter" }}
                </button>
            </form>

            <Show when=move || !is_admin_login() fallback=|| view! { }>
                <p class="form-hint">
                    "Pas encore de compte ? " <A href=Route::Register.path()>"S'inscrire"</A>
                </p>
            </Show>
        </div>
    }
}
