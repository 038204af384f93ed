//! 3D preview dialog.

use cartel::Artwork;
use leptos::html::Div;
use leptos::*;

use crate::services::api::image_url;
use crate::services::ArtworkViewer;
use crate::{VIEWER_HEIGHT, VIEWER_WIDTH};

#[component]
pub fn Viewer3dDialog(artwork: Artwork, on_close: Callback<()>) -> impl IntoView {
    let container = create_node_ref::<Div>();
    let viewer = store_value(None::<ArtworkViewer>);
    let (error, set_error) = create_signal(None::<String>);
    let url = image_url(artwork.id);

    container.on_load(move |div| {
        match ArtworkViewer::mount(&div, &url, VIEWER_WIDTH, VIEWER_HEIGHT) {
            Ok(v) => viewer.set_value(Some(v)),
            Err(e) => {
                log::error!("❌ {}", e);
                set_error.set(Some(e));
            }
        }
    });
    on_cleanup(move || viewer.update_value(|v| *v = None));

    let style = format!("width:{}px;height:{}px", VIEWER_WIDTH, VIEWER_HEIGHT);

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{artwork.nom.clone()}</h2>
                </div>
                <div class="viewer-3d" style=style node_ref=container></div>
                <Show when=move || error.get().is_some() fallback=|| view! { }>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="modal-actions">
                    <button on:click=move |_| on_close.call(())>"Fermer"</button>
                </div>
            </div>
        </div>
    }
}
