//! Artist dossier form (`/register`): identity, catalog preferences and
//! ten artwork slots, posted as one multipart request.

use cartel::submission::{EntryField, MSG_DOSSIER_FAILED, MSG_DOSSIER_SENT};
use cartel::{ArtistDossier, Civilite, Notification, DOSSIER_SLOTS};
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::{
    bind_flag, bind_text, picked_file, CheckboxField, NotificationBanner, TextBinding, TextField,
};
use crate::services::{api, read_file};
use crate::PHOTO_ACCEPT;

#[component]
pub fn DossierForm() -> impl IntoView {
    let form = create_rw_signal(ArtistDossier::new());
    let status = create_rw_signal(None::<Notification>);
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = form.with(ArtistDossier::to_payload);
        let filled = form.with(ArtistDossier::filled_entries);
        spawn_local(async move {
            set_busy.set(true);
            status.set(None);
            log::info!("📤 Sending dossier with {} artworks", filled);
            match api::submit_dossier(&payload).await {
                Ok(_) => {
                    status.set(Some(Notification::success(MSG_DOSSIER_SENT)));
                    form.set(ArtistDossier::new());
                }
                Err(e) => status.set(Some(Notification::error(e.user_message(MSG_DOSSIER_FAILED)))),
            }
            set_busy.set(false);
        });
    };

    let on_civilite = move |ev: web_sys::Event| {
        if let Ok(c) = event_target_value(&ev).parse::<Civilite>() {
            form.update(|d| d.civilite = c);
        }
    };

    view! {
        <form class="container form dossier" on:submit=on_submit>
            <h1>"Formulaire d'Inscription"</h1>
            <NotificationBanner
                notification=status
                on_dismiss=Callback::new(move |_: ()| status.set(None))
            />

            <h2>"Numéro de Dossier"</h2>
            <TextField
                label="Numéro de dossier"
                bind=bind_text(form, |d| &d.numero_dossier, |d| &mut d.numero_dossier)
            />

            <h2>"Coordonnées Personnelles"</h2>
            <div class="radio-group">
                {Civilite::ALL
                    .into_iter()
                    .map(|c| view! {
                        <label class="radio">
                            <input
                                type="radio"
                                name="civilite"
                                value=c.as_str()
                                prop:checked=move || form.with(|d| d.civilite == c)
                                on:change=on_civilite
                            />
                            {c.as_str()}
                        </label>
                    })
                    .collect_view()}
            </div>

            <div class="form-grid">
                <TextField label="Nom" bind=bind_text(form, |d| &d.nom, |d| &mut d.nom)/>
                <TextField label="Catégorie" bind=bind_text(form, |d| &d.categorie, |d| &mut d.categorie)/>
                <TextField label="Prénom" bind=bind_text(form, |d| &d.prenom, |d| &mut d.prenom)/>
                <TextField label="Nom Artiste" bind=bind_text(form, |d| &d.nom_artiste, |d| &mut d.nom_artiste)/>
                <TextField
                    label="Prénom Artiste"
                    bind=bind_text(form, |d| &d.prenom_artiste, |d| &mut d.prenom_artiste)
                />
                <TextField label="Adresse" bind=bind_text(form, |d| &d.adresse, |d| &mut d.adresse)/>
                <TextField label="Code Postal" bind=bind_text(form, |d| &d.code_postal, |d| &mut d.code_postal)/>
                <TextField label="Ville" bind=bind_text(form, |d| &d.ville, |d| &mut d.ville)/>
                <TextField label="Pays" bind=bind_text(form, |d| &d.pays, |d| &mut d.pays)/>
                <TextField
                    label="Téléphone Mobile"
                    input_type="tel"
                    bind=bind_text(form, |d| &d.telephone, |d| &mut d.telephone)
                />
                <TextField label="Email" input_type="email" bind=bind_text(form, |d| &d.email, |d| &mut d.email)/>
                <TextField
                    label="Site Internet"
                    bind=bind_text(form, |d| &d.site_internet, |d| &mut d.site_internet)
                />
                <TextField label="Facebook/Autres" bind=bind_text(form, |d| &d.facebook, |d| &mut d.facebook)/>
                <TextField label="Numéro MDA" bind=bind_text(form, |d| &d.numero_mda, |d| &mut d.numero_mda)/>
                <TextField label="Numéro SIRET" bind=bind_text(form, |d| &d.numero_siret, |d| &mut d.numero_siret)/>
            </div>

            <h2>"Edition sur le Catalogue et sur notre Site Internet"</h2>
            <TextField
                label="Nom à afficher sur le catalogue"
                bind=bind_text(form, |d| &d.nom_catalogue, |d| &mut d.nom_catalogue)
            />
            <div class="form-grid">
                <CheckboxField
                    label="Edition Adresse"
                    bind=bind_flag(form, |d| d.edition_adresse, |d| &mut d.edition_adresse)
                />
                <CheckboxField
                    label="Edition Téléphone"
                    bind=bind_flag(form, |d| d.edition_telephone, |d| &mut d.edition_telephone)
                />
                <CheckboxField
                    label="Edition Email"
                    bind=bind_flag(form, |d| d.edition_email, |d| &mut d.edition_email)
                />
                <CheckboxField
                    label="Edition Site Internet"
                    bind=bind_flag(form, |d| d.edition_site, |d| &mut d.edition_site)
                />
                <CheckboxField
                    label="Edition Facebook/Autres"
                    bind=bind_flag(form, |d| d.edition_facebook, |d| &mut d.edition_facebook)
                />
            </div>

            <h2>"Œuvres à Exposer"</h2>
            {(0..DOSSIER_SLOTS)
                .map(|index| view! { <DossierSlot form=form index=index/> })
                .collect_view()}

            <button type="submit" class="primary-button" disabled=move || busy.get()>
                {move || if busy.get() { "⏳ Envoi en cours..." } else { "Soumettre le dossier" }}
            </button>
        </form>
    }
}

/// One artwork slot. Text edits and photo picks go through the dossier's
/// slot setters.
#[component]
fn DossierSlot(form: RwSignal<ArtistDossier>, index: usize) -> impl IntoView {
    let bind = move |field: EntryField| -> TextBinding {
        (
            Signal::derive(move || {
                form.with(|d| d.entry(index).map(|e| e.field(field).to_string()).unwrap_or_default())
            }),
            Callback::new(move |value: String| {
                form.update(|d| {
                    if let Err(e) = d.set_entry_field(index, field, value) {
                        log::warn!("⚠️ {}", e);
                    }
                })
            }),
        )
    };

    let photo_name = move || {
        form.with(|d| {
            d.entry(index)
                .ok()
                .and_then(|e| e.photo.as_ref())
                .map(|p| p.file_name.clone())
        })
    };

    let on_photo = move |ev: web_sys::Event| {
        let Some(file) = picked_file(&ev) else { return };
        spawn_local(async move {
            match read_file(&file).await {
                Ok(part) => form.update(|d| {
                    if let Err(e) = d.set_entry_photo(index, Some(part)) {
                        log::warn!("⚠️ {}", e);
                    }
                }),
                Err(e) => log::error!("❌ {}", e),
            }
        });
    };

    let input_id = format!("oeuvre{}_photo", index + 1);

    view! {
        <fieldset class="slot">
            <legend>{format!("Œuvre N°{}", index + 1)}</legend>
            <div class="form-grid">
                <TextField label="Titre" bind=bind(EntryField::Titre)/>
                <TextField label="Technique" bind=bind(EntryField::Technique)/>
                <TextField label="Dimensions (L x H x P en cm)" bind=bind(EntryField::Dimensions)/>
                <TextField label="Prix (euros)" bind=bind(EntryField::Prix)/>
            </div>
            <input
                type="file"
                id=input_id.clone()
                accept=PHOTO_ACCEPT
                style="display:none"
                on:change=on_photo
            />
            <label for=input_id class="upload-button">"Ajouter une photo"</label>
            <span class="file-name">{move || photo_name().unwrap_or_default()}</span>
        </fieldset>
    }
}
