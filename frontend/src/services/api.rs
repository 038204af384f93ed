//! HTTP service over `gloo-net`.
//!
//! Same contract as the native client: the stored token goes out as a
//! bearer header, responses go through [`check_status`], and a 401 clears
//! the session then sends the browser to the login page.

use cartel::api::{decode, decode_artist, decode_artworks, decode_or_default};
use cartel::{
    check_status, ApiError, ApiResult, Artist, Artwork, Confirmation, Credentials, Endpoint,
    FormPayload, Method, NewArtist, Session, VoteReceipt,
};
use gloo_net::http::Request;
use serde_json::{json, Value};
use web_sys::FormData;

use crate::config::API_BASE;
use crate::services::files::blob_from_bytes;
use crate::services::storage::session_store;

enum Body {
    Empty,
    Json(Value),
    Form(FormData),
}

fn network(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn send(endpoint: Endpoint, body: Body) -> ApiResult<Vec<u8>> {
    let url = endpoint.url(API_BASE);
    let mut builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    if let Some(token) = session_store().token()? {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(form) => builder.body(form),
    }
    .map_err(network)?;

    log::debug!("📡 {} {}", endpoint.method().as_str(), endpoint.path());
    let response = request.send().await.map_err(network)?;
    let status = response.status();
    let bytes = response.binary().await.map_err(network)?;

    if let Err(err) = check_status(endpoint, status, &bytes) {
        if let ApiError::Unauthorized { redirect } = err {
            log::warn!("🔒 {} answered 401, clearing session", endpoint.path());
            session_store().clear()?;
            redirect_to(redirect);
        } else {
            log::warn!("⚠️ {} failed: {}", endpoint.path(), err);
        }
        return Err(err);
    }
    Ok(bytes)
}

/// Full page navigation, dropping every in-memory signal.
fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("❌ Redirect to {} failed: {:?}", path, e);
        }
    }
}

/// Browser `FormData` from a transport-neutral payload.
fn form_data(payload: &FormPayload) -> ApiResult<FormData> {
    let js = |e: wasm_bindgen::JsValue| ApiError::Network(format!("FormData: {:?}", e));

    let form = FormData::new().map_err(js)?;
    for (key, value) in payload.fields() {
        form.append_with_str(key, value).map_err(js)?;
    }
    for (key, part) in payload.files() {
        let blob = blob_from_bytes(&part.bytes, &part.mime).map_err(js)?;
        form.append_with_blob_and_filename(key, &blob, &part.file_name)
            .map_err(js)?;
    }
    Ok(form)
}

// =============================================================================
// Session
// =============================================================================

/// Authenticate and persist the issued session.
pub async fn login(credentials: &Credentials) -> ApiResult<Session> {
    let body = send(Endpoint::Login, Body::Json(serde_json::to_value(credentials)?)).await?;
    let session: Session = decode(&body)?;
    session_store().save(&session)?;
    log::info!("🔑 Logged in as {}", session.user.username);
    Ok(session)
}

pub fn logout() -> ApiResult<()> {
    session_store().clear()?;
    Ok(())
}

pub async fn register_artist(artist: &NewArtist) -> ApiResult<Artist> {
    let body = send(Endpoint::RegisterArtist, Body::Json(serde_json::to_value(artist)?)).await?;
    decode_artist(&body)
}

// =============================================================================
// Artworks
// =============================================================================

pub async fn fetch_artworks() -> ApiResult<Vec<Artwork>> {
    decode_artworks(&send(Endpoint::Artworks, Body::Empty).await?)
}

pub async fn fetch_artwork(id: u32) -> ApiResult<Artwork> {
    decode(&send(Endpoint::Artwork(id), Body::Empty).await?)
}

pub async fn submit_artwork(payload: &FormPayload) -> ApiResult<Value> {
    let body = send(Endpoint::SubmitArtwork, Body::Form(form_data(payload)?)).await?;
    decode_or_default(&body)
}

pub async fn submit_dossier(payload: &FormPayload) -> ApiResult<Confirmation> {
    let body = send(Endpoint::SubmitDossier, Body::Form(form_data(payload)?)).await?;
    decode_or_default(&body)
}

pub async fn vote(artwork_id: u32) -> ApiResult<VoteReceipt> {
    let body = send(Endpoint::Vote, Body::Json(json!({ "oeuvre_id": artwork_id }))).await?;
    decode_or_default(&body)
}

/// `src` for `<img>` and the 3D texture.
pub fn image_url(artwork_id: u32) -> String {
    Endpoint::ArtworkImage(artwork_id).url(API_BASE)
}

// =============================================================================
// Curation
// =============================================================================

pub async fn finalize_selection(ids: &[u32]) -> ApiResult<Confirmation> {
    let body = send(
        Endpoint::FinalizeSelection,
        Body::Json(json!({ "selected_artworks": ids })),
    )
    .await?;
    decode_or_default(&body)
}

/// Catalog PDF bytes.
pub async fn generate_catalog() -> ApiResult<Vec<u8>> {
    send(Endpoint::Catalog, Body::Empty).await
}

pub async fn generate_artist_summary(artist_id: u32) -> ApiResult<Vec<u8>> {
    send(Endpoint::ArtistSummary(artist_id), Body::Empty).await
}

pub async fn fetch_artists() -> ApiResult<Vec<Artist>> {
    decode(&send(Endpoint::Artists, Body::Empty).await?)
}
