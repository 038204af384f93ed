//! Single artwork submission (`/soumettre`).
//!
//! Dimension inputs follow the chosen type: framed/unframed sizes for flat
//! works, volume, weight and base for sculptures.

use cartel::submission::{dimension_label, MSG_ARTWORK_FAILED, MSG_ARTWORK_SENT};
use cartel::{ArtworkSubmission, ArtworkType, Notification};
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;

use crate::components::{bind_text, picked_file, InlineError, TextField};
use crate::services::{api, read_file};
use crate::types::use_app_state;
use crate::PHOTO_ACCEPT;

#[component]
pub fn ArtworkSubmissionPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let form = create_rw_signal(ArtworkSubmission::new());
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with(ArtworkSubmission::to_payload) {
            Ok(p) => p,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::submit_artwork(&payload).await {
                Ok(_) => {
                    log::info!("🖼️ Artwork submitted");
                    state.flash.set(Some(Notification::success(MSG_ARTWORK_SENT)));
                    navigate("/", Default::default());
                }
                Err(e) => set_error.set(Some(e.user_message(MSG_ARTWORK_FAILED))),
            }
            set_busy.set(false);
        });
    };

    let on_type = move |ev: web_sys::Event| {
        let kind = event_target_value(&ev).parse::<ArtworkType>().ok();
        form.update(|f| f.type_oeuvre = kind);
    };

    let on_photo = move |ev: web_sys::Event| {
        let Some(file) = picked_file(&ev) else { return };
        spawn_local(async move {
            match read_file(&file).await {
                Ok(part) => form.update(|f| f.photo = Some(part)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let photo_name = move || form.with(|f| f.photo.as_ref().map(|p| p.file_name.clone()));
    let dimension_keys = move || form.with(|f| f.dimension_keys().to_vec());

    view! {
        <div class="container form-container">
            <h1>"Soumettre une Œuvre"</h1>
            <InlineError error=error/>

            <form class="form" on:submit=on_submit>
                <TextField label="Titre de l'œuvre" required=true bind=bind_text(form, |f| &f.nom, |f| &mut f.nom)/>
                <TextField
                    label="Prix (€)"
                    input_type="number"
                    required=true
                    bind=bind_text(form, |f| &f.prix, |f| &mut f.prix)
                />
                <TextField
                    label="Technique"
                    multiline=true
                    bind=bind_text(form, |f| &f.technique, |f| &mut f.technique)
                />

                <label class="field">
                    <span class="field-label">"Type d'œuvre *"</span>
                    <select required=true on:change=on_type>
                        <option value="" selected=true disabled=true>"Choisir..."</option>
                        {ArtworkType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <div class="form-grid">
                    <For
                        each=dimension_keys
                        key=|key| *key
                        children=move |name| view! { <DimensionField form=form name=name/> }
                    />
                </div>

                <input
                    type="file"
                    id="photoInput"
                    accept=PHOTO_ACCEPT
                    style="display:none"
                    on:change=on_photo
                />
                <label for="photoInput" class="upload-button">"Choisir une photo *"</label>
                <span class="file-name">{move || photo_name().unwrap_or_default()}</span>

                <button type="submit" class="primary-button" disabled=move || busy.get()>
                    {move || if busy.get() { "⏳ Envoi en cours..." } else { "Soumettre l'œuvre" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn DimensionField(form: RwSignal<ArtworkSubmission>, name: &'static str) -> impl IntoView {
    let bind = (
        Signal::derive(move || form.with(|f| f.dimension(name).unwrap_or_default().to_string())),
        Callback::new(move |value: String| {
            form.update(|f| {
                f.set_dimension(name, value);
            })
        }),
    );
    let input_type = if name == "dimension_socle" { "text" } else { "number" };

    view! { <TextField label=dimension_label(name) input_type=input_type bind=bind/> }
}
