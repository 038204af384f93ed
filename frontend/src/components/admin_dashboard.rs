//! Artwork curation dashboard (`/admin`).
//!
//! All state lives in one [`CurationState`] signal. The view only emits
//! [`CurationIntent`]s; network results are fed back through the state's
//! own transitions.

use cartel::curation::{LoadState, MSG_LOAD_FAILED};
use cartel::{CurationIntent, CurationState, Modal, Tab, CATALOG_FILE_NAME};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::{ArtworkCard, ArtworkDetailsDialog, NotificationBanner, Viewer3dDialog};
use crate::services::{api, save_pdf};
use crate::NOTIFICATION_TIMEOUT_MS;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = create_rw_signal(CurationState::new());
    let dispatch = move |intent: CurationIntent| state.update(|s| s.apply(intent));
    let (busy, set_busy) = create_signal(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_artworks().await {
                Ok(list) => state.update(|s| s.load(list)),
                Err(e) => {
                    log::error!("❌ Error fetching artworks: {}", e);
                    state.update(CurationState::load_failed);
                }
            }
        })
    };
    load();

    // Auto-hide: only the latest notification's timer may dismiss it.
    let notification = create_memo(move |_| state.with(|s| s.notification().cloned()));
    let notification_seq = create_memo(move |_| state.with(CurationState::notification_seq));
    create_effect(move |_| {
        let current = notification_seq.get();
        if current == 0 {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            if state.with_untracked(CurationState::notification_seq) == current {
                dispatch(CurationIntent::DismissNotification);
            }
        });
    });

    let on_save = move |_| {
        let ids = state.with(CurationState::selection_ids);
        spawn_local(async move {
            set_busy.set(true);
            match api::finalize_selection(&ids).await {
                Ok(_) => {
                    log::info!("✅ Selection saved: {} artworks", ids.len());
                    state.update(CurationState::selection_saved);
                    load();
                }
                Err(e) => {
                    log::error!("❌ Error saving selection: {}", e);
                    state.update(CurationState::selection_save_failed);
                }
            }
            set_busy.set(false);
        });
    };

    let on_export = move |_| {
        spawn_local(async move {
            set_busy.set(true);
            let saved = match api::generate_catalog().await {
                Ok(bytes) => save_pdf(&bytes, CATALOG_FILE_NAME),
                Err(e) => Err(e.to_string()),
            };
            match saved {
                Ok(()) => state.update(CurationState::catalog_ready),
                Err(e) => {
                    log::error!("❌ Error generating catalog: {}", e);
                    state.update(CurationState::catalog_failed);
                }
            }
            set_busy.set(false);
        });
    };

    let on_toggle = Callback::new(move |id| dispatch(CurationIntent::Toggle(id)));
    let on_view_3d = Callback::new(move |id| dispatch(CurationIntent::View3d(id)));
    let on_details = Callback::new(move |id| dispatch(CurationIntent::ViewDetails(id)));
    let on_close = Callback::new(move |_: ()| dispatch(CurationIntent::CloseModal));

    let visible = move || state.with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>());
    let modal = create_memo(move |_| {
        state.with(|s| s.modal_artwork().cloned().map(|a| (s.modal(), a)))
    });
    let tab_class = move |tab: Tab| {
        move || if state.with(|s| s.tab() == tab) { "tab active" } else { "tab" }
    };

    view! {
        <div class="container admin">
            <h1>"Administration des Œuvres"</h1>

            <NotificationBanner
                notification=notification
                on_dismiss=Callback::new(move |_: ()| dispatch(CurationIntent::DismissNotification))
            />

            {move || match state.with(CurationState::load_state) {
                LoadState::Loading => view! { <div class="spinner">"⏳ Chargement..."</div> }.into_view(),
                LoadState::Failed => view! { <div class="alert alert-error">{MSG_LOAD_FAILED}</div> }.into_view(),
                LoadState::Ready => ().into_view(),
            }}

            <div class="tabs">
                <button class=tab_class(Tab::All) on:click=move |_| dispatch(CurationIntent::SwitchTab(Tab::All))>
                    {move || state.with(CurationState::all_tab_label)}
                </button>
                <button class=tab_class(Tab::Selected) on:click=move |_| dispatch(CurationIntent::SwitchTab(Tab::Selected))>
                    {move || state.with(CurationState::selected_tab_label)}
                </button>
            </div>

            <div class="toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="🔍 Rechercher une œuvre..."
                    prop:value=move || state.with(|s| s.search().to_string())
                    on:input=move |ev| dispatch(CurationIntent::Search(event_target_value(&ev)))
                />
                <button
                    class="primary-button"
                    disabled=move || busy.get() || !state.with(CurationState::can_save)
                    on:click=on_save
                >
                    "💾 Enregistrer la sélection"
                </button>
                <button
                    class="secondary-button"
                    disabled=move || busy.get() || !state.with(CurationState::can_export)
                    on:click=on_export
                >
                    "📄 Générer le PDF"
                </button>
            </div>

            <div class="artwork-grid">
                <For
                    each=visible
                    key=|a| (a.id, a.votes, a.selectionne)
                    children=move |artwork| {
                        let id = artwork.id;
                        view! {
                            <ArtworkCard
                                artwork=artwork
                                selected=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                on_toggle=on_toggle
                                on_view_3d=on_view_3d
                                on_details=on_details
                            />
                        }
                    }
                />
            </div>

            {move || match modal.get() {
                Some((Modal::Viewer3d(_), artwork)) => {
                    view! { <Viewer3dDialog artwork=artwork on_close=on_close/> }.into_view()
                }
                Some((Modal::Details(_), artwork)) => {
                    view! { <ArtworkDetailsDialog artwork=artwork on_close=on_close/> }.into_view()
                }
                _ => ().into_view(),
            }}
        </div>
    }
}
