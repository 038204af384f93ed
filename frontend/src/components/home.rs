//! Landing page: entry points for artists and admins, then the published
//! artworks.

use cartel::{Artwork, Route};
use leptos::*;
use leptos_router::*;

use crate::components::NotificationBanner;
use crate::services::api;
use crate::types::use_app_state;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_app_state();
    let flash = create_rw_signal(state.take_flash());
    let (artworks, set_artworks) = create_signal(Vec::<Artwork>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    spawn_local(async move {
        match api::fetch_artworks().await {
            Ok(list) => {
                log::info!("🖼️ {} artworks published", list.len());
                set_artworks.set(list);
            }
            Err(e) => {
                log::error!("❌ Error fetching artworks: {}", e);
                set_error.set(Some("Erreur lors du chargement des œuvres".to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="container">
            <NotificationBanner
                notification=flash
                on_dismiss=Callback::new(move |_: ()| flash.set(None))
            />

            <section class="hero">
                <h1>"Bienvenue à l'Exposition d'Art"</h1>
                <p class="hero-subtitle">"Découvrez une collection unique d'œuvres d'art contemporain"</p>
                <A href=Route::SubmitArtwork.path() class="primary-button">"Soumettre votre Œuvre"</A>
            </section>

            <section class="spaces">
                <A href=Route::Dossier.path() class="space-card">
                    <div class="space-icon">"🎨"</div>
                    <h2>"Espace Artiste"</h2>
                    <p>"Inscrivez-vous pour soumettre vos œuvres d'art"</p>
                    <span class="primary-button">"S'inscrire"</span>
                </A>
                <A href=Route::AdminLogin.path() class="space-card">
                    <div class="space-icon">"🛠️"</div>
                    <h2>"Espace Administrateur"</h2>
                    <p>"Gérez les artistes et les œuvres"</p>
                    <span class="secondary-button">"Se connecter"</span>
                </A>
            </section>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Chargement..."</p> }>
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! { <p class="error-message">{error.get()}</p> }
                >
                    <div class="artwork-grid">
                        <For
                            each=move || artworks.get()
                            key=|a| a.id
                            children=|artwork| view! { <PublicArtworkCard artwork=artwork/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn PublicArtworkCard(artwork: Artwork) -> impl IntoView {
    view! {
        <div class="artwork-card">
            <img class="artwork-thumb" src=api::image_url(artwork.id) alt=artwork.nom.clone()/>
            <div class="card-content">
                <div class="card-title">{artwork.nom.clone()}</div>
                <div class="card-subtitle">{artwork.artist.full_name()}</div>
                <A href=Route::ArtworkDetail(artwork.id).path() class="outlined-button">
                    "Voir les détails"
                </A>
            </div>
        </div>
    }
}
