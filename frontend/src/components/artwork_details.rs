//! Artwork detail panel, used by the dashboard dialog and the public page.

use cartel::Artwork;
use leptos::*;

use crate::services::api::image_url;

/// Image, information, artist and status columns.
#[component]
pub fn ArtworkInfo(artwork: Artwork) -> impl IntoView {
    let artist = artwork.artist.clone();
    let submitted = artwork
        .submitted_on()
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string());
    let dimensions = artwork.dimensions.describe();
    let status_class = if artwork.selectionne { "chip chip-success" } else { "chip" };

    view! {
        <div class="details-grid">
            <img class="details-image" src=image_url(artwork.id) alt=artwork.nom.clone()/>

            <div class="details-text">
                <h3>"Informations"</h3>
                <div class="chips">
                    <span class="chip chip-primary">{artwork.type_oeuvre.as_str()}</span>
                    <span class="chip chip-secondary">{artwork.price_label()}</span>
                </div>
                <p><strong>"Technique: "</strong>{artwork.technique.clone()}</p>
                {dimensions.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}

                <hr/>
                <h3>"Artiste"</h3>
                <p><strong>"Nom: "</strong>{artist.full_name()}</p>
                <p><strong>"Email: "</strong>{artist.email.clone()}</p>
                {artist.telephone.clone().filter(|t| !t.is_empty()).map(|t| view! {
                    <p><strong>"Téléphone: "</strong>{t}</p>
                })}
                {artist.adresse.clone().filter(|a| !a.is_empty()).map(|a| view! {
                    <p><strong>"Adresse: "</strong>{a}</p>
                })}

                <hr/>
                <h3>"Statut"</h3>
                <p><strong>"Date de soumission: "</strong>{submitted}</p>
                <p><strong>"Votes: "</strong>{artwork.votes}</p>
                <span class=status_class>{artwork.status_label()}</span>
            </div>
        </div>
    }
}

/// Modal wrapper around [`ArtworkInfo`].
#[component]
pub fn ArtworkDetailsDialog(artwork: Artwork, on_close: Callback<()>) -> impl IntoView {
    let title = artwork.nom.clone();
    let by = format!("par {}", artwork.artist.nom_artiste);

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <div class="modal-subtitle">{by}</div>
                </div>
                <ArtworkInfo artwork=artwork/>
                <div class="modal-actions">
                    <button on:click=move |_| on_close.call(())>"Fermer"</button>
                </div>
            </div>
        </div>
    }
}
