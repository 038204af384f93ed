//! Artist listing dashboard (`/admin/artists`): search, pagination and a
//! read-only detail dialog.

use cartel::{Artist, ArtistListIntent, ArtistListState, PageSize};
use leptos::*;

use crate::services::{api, save_pdf};

#[component]
pub fn ArtistList() -> impl IntoView {
    let state = create_rw_signal(ArtistListState::new());
    let dispatch = move |intent: ArtistListIntent| state.update(|s| s.apply(intent));

    spawn_local(async move {
        match api::fetch_artists().await {
            Ok(artists) => {
                log::info!("👥 {} artists loaded", artists.len());
                state.update(|s| s.load(artists));
            }
            Err(e) => state.update(|s| s.load_failed(&e)),
        }
    });

    let rows = move || state.with(|s| s.page_rows().into_iter().cloned().collect::<Vec<_>>());
    let open_artist = create_memo(move |_| state.with(|s| s.open_artist().cloned()));
    let pagination = move || state.with(ArtistListState::pagination);
    let total = move || state.with(ArtistListState::total);

    let on_page_size = move |ev: web_sys::Event| {
        if let Some(size) = event_target_value(&ev).parse().ok().and_then(PageSize::from_usize) {
            dispatch(ArtistListIntent::SetPageSize(size));
        }
    };

    view! {
        <div class="container admin">
            <h1>"Tableau de Bord Administrateur"</h1>

            <input
                type="search"
                class="search-input"
                placeholder="🔍 Rechercher un artiste..."
                prop:value=move || state.with(|s| s.search().to_string())
                on:input=move |ev| dispatch(ArtistListIntent::Search(event_target_value(&ev)))
            />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Nom d'artiste"</th>
                        <th>"Nom"</th>
                        <th>"Prénom"</th>
                        <th>"Type"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|a| a.id
                        children=move |artist| {
                            let id = artist.id;
                            view! {
                                <tr>
                                    <td>{artist.nom_artiste}</td>
                                    <td>{artist.nom}</td>
                                    <td>{artist.prenom}</td>
                                    <td>{artist.type_artiste.map(|t| t.as_str()).unwrap_or_default()}</td>
                                    <td>
                                        <button
                                            class="icon-button"
                                            title="Voir"
                                            on:click=move |_| dispatch(ArtistListIntent::Open(id))
                                        >
                                            "👁"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="pagination">
                <label>
                    "Lignes par page : "
                    <select on:change=on_page_size>
                        {PageSize::ALL
                            .into_iter()
                            .map(|size| view! {
                                <option
                                    value=size.get().to_string()
                                    selected=move || pagination().size() == size
                                >
                                    {size.get()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <span>{move || state.with(ArtistListState::page_label)}</span>
                <button
                    disabled=move || !pagination().has_previous()
                    on:click=move |_| dispatch(ArtistListIntent::SetPage(pagination().page().saturating_sub(1)))
                >
                    "‹"
                </button>
                <button
                    disabled=move || !pagination().has_next(total())
                    on:click=move |_| dispatch(ArtistListIntent::SetPage(pagination().page() + 1))
                >
                    "›"
                </button>
            </div>

            {move || open_artist.get().map(|artist| view! {
                <ArtistDialog
                    artist=artist
                    on_close=Callback::new(move |_: ()| dispatch(ArtistListIntent::Close))
                />
            })}
        </div>
    }
}

#[component]
fn ArtistDialog(artist: Artist, on_close: Callback<()>) -> impl IntoView {
    let (error, set_error) = create_signal(None::<String>);
    let id = artist.id;

    let on_summary = move |_| {
        spawn_local(async move {
            let saved = match api::generate_artist_summary(id).await {
                Ok(bytes) => save_pdf(&bytes, &format!("artiste_{}.pdf", id)),
                Err(e) => Err(e.user_message("Erreur lors de la génération du PDF")),
            };
            if let Err(e) = saved {
                log::error!("❌ Artist summary {}: {}", id, e);
                set_error.set(Some(e));
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{format!("Détails de l'artiste : {}", artist.nom_artiste)}</h2>
                </div>
                <h3>"Informations personnelles"</h3>
                <p>"Nom : " {artist.nom.clone()}</p>
                <p>"Prénom : " {artist.prenom.clone()}</p>
                <p>"Email : " {artist.email.clone()}</p>
                <p>"Téléphone : " {artist.telephone_display().to_string()}</p>
                <p>"Adresse : " {artist.adresse_display().to_string()}</p>
                <p>"Type : " {artist.type_artiste.map(|t| t.as_str()).unwrap_or_default()}</p>
                <Show when=move || error.get().is_some() fallback=|| view! { }>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="modal-actions">
                    <button on:click=on_summary>"📄 Fiche PDF"</button>
                    <button on:click=move |_| on_close.call(())>"Fermer"</button>
                </div>
            </div>
        </div>
    }
}
