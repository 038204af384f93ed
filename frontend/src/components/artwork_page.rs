//! Public artwork page (`/oeuvre/:id`) with voting.

use cartel::Artwork;
use leptos::*;
use leptos_router::*;

use crate::components::ArtworkInfo;
use crate::services::api;

#[component]
pub fn ArtworkPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()));

    let (artwork, set_artwork) = create_signal(None::<Artwork>);
    let (error, set_error) = create_signal(None::<String>);
    let (voting, set_voting) = create_signal(false);

    create_effect(move |_| {
        let Some(id) = id() else {
            set_error.set(Some("Œuvre introuvable".to_string()));
            return;
        };
        spawn_local(async move {
            match api::fetch_artwork(id).await {
                Ok(a) => {
                    set_error.set(None);
                    set_artwork.set(Some(a));
                }
                Err(e) => {
                    log::error!("❌ Error fetching artwork {}: {}", id, e);
                    set_error.set(Some(e.user_message("Erreur lors du chargement de l'œuvre")));
                }
            }
        });
    });

    let on_vote = move |_| {
        let Some(id) = id() else { return };
        spawn_local(async move {
            set_voting.set(true);
            match api::vote(id).await {
                Ok(receipt) => {
                    log::info!("🗳️ Voted for artwork {}", id);
                    set_artwork.update(|a| {
                        if let Some(a) = a {
                            a.votes = receipt.votes.unwrap_or(a.votes + 1);
                        }
                    });
                }
                Err(e) => set_error.set(Some(e.user_message("Erreur lors du vote"))),
            }
            set_voting.set(false);
        });
    };

    view! {
        <div class="container">
            <A href="/" class="back-link">"← Retour"</A>

            <Show when=move || error.get().is_some() fallback=|| view! { }>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || artwork.get().map(|a| view! {
                <h1>{a.nom.clone()}</h1>
                <div class="modal-subtitle">{format!("par {}", a.artist.nom_artiste)}</div>
                <ArtworkInfo artwork=a/>
            })}

            <Show when=move || artwork.with(Option::is_some) fallback=|| view! { }>
                <button class="primary-button" disabled=move || voting.get() on:click=on_vote>
                    {move || if voting.get() { "⏳ Vote en cours..." } else { "Voter pour cette œuvre" }}
                </button>
            </Show>
        </div>
    }
}
