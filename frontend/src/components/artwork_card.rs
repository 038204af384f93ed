//! Artwork card of the curation grid.

use cartel::Artwork;
use leptos::*;

use crate::services::api::image_url;

#[component]
pub fn ArtworkCard(
    artwork: Artwork,
    #[prop(into)] selected: Signal<bool>,
    on_toggle: Callback<u32>,
    on_view_3d: Callback<u32>,
    on_details: Callback<u32>,
) -> impl IntoView {
    let id = artwork.id;

    view! {
        <div class="artwork-card" class:selected=move || selected.get()>
            <img class="artwork-thumb" src=image_url(id) alt=artwork.nom.clone()/>

            <div class="card-actions">
                <button class="icon-button" title="Voir en 3D" on:click=move |_| on_view_3d.call(id)>
                    "🧊"
                </button>
                <button class="icon-button" title="Détails" on:click=move |_| on_details.call(id)>
                    "ℹ️"
                </button>
            </div>

            <div class="card-content">
                <div class="card-title">{artwork.nom.clone()}</div>
                <div class="card-subtitle">{artwork.artist.nom_artiste.clone()}</div>
                <div class="chips">
                    <span class="chip chip-primary">{artwork.type_oeuvre.as_str()}</span>
                    <span class="chip chip-secondary">{artwork.price_label()}</span>
                </div>
                <button
                    class=move || if selected.get() { "select-button active" } else { "select-button" }
                    on:click=move |_| on_toggle.call(id)
                >
                    {move || if selected.get() { "✔ Sélectionné" } else { "✖ Sélectionner" }}
                </button>
            </div>
        </div>
    }
}
