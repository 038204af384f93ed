//! Artist account registration (`/inscription`).

use cartel::submission::{MSG_REGISTERED, MSG_REGISTER_FAILED};
use cartel::{ArtistType, Notification, RegistrationForm};
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;

use crate::components::{bind_text, InlineError, TextField};
use crate::services::api;
use crate::types::use_app_state;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let form = create_rw_signal(RegistrationForm::default());
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Password mismatch and missing fields never reach the server.
        let artist = match form.with(RegistrationForm::validate) {
            Ok(a) => a,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::register_artist(&artist).await {
                Ok(created) => {
                    log::info!("🎨 Registered artist {}", created.nom_artiste);
                    state.flash.set(Some(Notification::success(MSG_REGISTERED)));
                    navigate(RegistrationForm::next_route(), Default::default());
                }
                Err(e) => set_error.set(Some(e.user_message(MSG_REGISTER_FAILED))),
            }
            set_busy.set(false);
        });
    };

    let on_type = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        form.update(|f| f.type_artiste = raw.parse::<ArtistType>().ok());
    };

    view! {
        <div class="container form-container">
            <h1>"Inscription Artiste"</h1>
            <InlineError error=error/>

            <form class="form form-grid" on:submit=on_submit>
                <TextField label="Nom" required=true bind=bind_text(form, |f| &f.nom, |f| &mut f.nom)/>
                <TextField label="Prénom" required=true bind=bind_text(form, |f| &f.prenom, |f| &mut f.prenom)/>
                <TextField
                    label="Nom d'artiste"
                    required=true
                    bind=bind_text(form, |f| &f.nom_artiste, |f| &mut f.nom_artiste)
                />
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
                <TextField
                    label="Confirmer le mot de passe"
                    input_type="password"
                    required=true
                    bind=bind_text(form, |f| &f.confirm_password, |f| &mut f.confirm_password)
                />
                <TextField
                    label="Téléphone"
                    input_type="tel"
                    bind=bind_text(form, |f| &f.telephone, |f| &mut f.telephone)
                />

                <label class="field">
                    <span class="field-label">"Type d'artiste *"</span>
                    <select required=true on:change=on_type>
                        <option value="" selected=true disabled=true>"Choisir..."</option>
                        {ArtistType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <TextField
                    label="Adresse"
                    multiline=true
                    bind=bind_text(form, |f| &f.adresse, |f| &mut f.adresse)
                />

                <button type="submit" class="primary-button" disabled=move || busy.get()>
                    {move || if busy.get() { "⏳ Inscription..." } else { "S'inscrire" }}
                </button>
            </form>

            <p class="form-hint">
                "Déjà inscrit ? " <A href=RegistrationForm::next_route()>"Se connecter"</A>
            </p>
        </div>
    }
}
