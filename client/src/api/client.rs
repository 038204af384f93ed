//! Native HTTP client over `reqwest`.
//!
//! One [`ApiClient`] per process. It owns the [`SessionStore`]: the stored
//! token goes out as `Authorization: Bearer ...` on every request, and any
//! 401 clears the store before the error is returned.

use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde_json::{json, Value};

use crate::api::endpoints::{Endpoint, Method};
use crate::api::response::{check_status, decode, decode_artist, decode_artworks, decode_or_default};
use crate::error::{ApiError, ApiResult};
use crate::models::{Artist, Artwork, Confirmation, Credentials, NewArtist, Session, VoteReceipt};
use crate::session::{SessionStore, StorageBackend};
use crate::submission::FormPayload;

pub struct ApiClient<B> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<B>,
}

impl<B: StorageBackend> ApiClient<B> {
    pub fn new(base_url: impl Into<String>, session: SessionStore<B>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore<B> {
        &self.session
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn request(&self, endpoint: Endpoint) -> ApiResult<RequestBuilder> {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        Ok(match self.session.token()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, endpoint: Endpoint, builder: RequestBuilder) -> ApiResult<Vec<u8>> {
        log::debug!("📡 {} {}", endpoint.method().as_str(), endpoint.path());

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Err(err) = check_status(endpoint, status, &body) {
            if err.is_unauthorized() {
                log::warn!("🔒 {} answered 401, clearing session", endpoint.path());
                self.session.clear()?;
            } else {
                log::warn!("⚠️ {} failed: {}", endpoint.path(), err);
            }
            return Err(err);
        }
        Ok(body.to_vec())
    }

    async fn get(&self, endpoint: Endpoint) -> ApiResult<Vec<u8>> {
        let builder = self.request(endpoint)?;
        self.send(endpoint, builder).await
    }

    async fn post_json(&self, endpoint: Endpoint, body: &Value) -> ApiResult<Vec<u8>> {
        let builder = self.request(endpoint)?.json(body);
        self.send(endpoint, builder).await
    }

    async fn post_form(&self, endpoint: Endpoint, payload: &FormPayload) -> ApiResult<Vec<u8>> {
        let builder = self.request(endpoint)?.multipart(multipart_form(payload));
        self.send(endpoint, builder).await
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Authenticate and persist the issued session.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        let body = self
            .post_json(
                Endpoint::Login,
                &json!({ "email": credentials.email, "password": credentials.password }),
            )
            .await?;
        let session: Session = decode(&body)?;
        self.session.save(&session)?;
        log::info!("🔑 Logged in as {}", session.user.username);
        Ok(session)
    }

    /// Local only: the server keeps no session state.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.clear()?;
        Ok(())
    }

    pub fn current_session(&self) -> ApiResult<Option<Session>> {
        Ok(self.session.current()?)
    }

    pub async fn register_artist(&self, artist: &NewArtist) -> ApiResult<Artist> {
        let body = self
            .post_json(Endpoint::RegisterArtist, &serde_json::to_value(artist)?)
            .await?;
        decode_artist(&body)
    }

    // =========================================================================
    // Artworks
    // =========================================================================

    /// Every artwork; the server does not paginate.
    pub async fn fetch_artworks(&self) -> ApiResult<Vec<Artwork>> {
        decode_artworks(&self.get(Endpoint::Artworks).await?)
    }

    pub async fn fetch_artwork(&self, id: u32) -> ApiResult<Artwork> {
        decode(&self.get(Endpoint::Artwork(id)).await?)
    }

    /// Single artwork submission. Returns the raw server reply.
    pub async fn submit_artwork(&self, payload: &FormPayload) -> ApiResult<Value> {
        decode_or_default(&self.post_form(Endpoint::SubmitArtwork, payload).await?)
    }

    /// Full dossier submission.
    pub async fn submit_dossier(&self, payload: &FormPayload) -> ApiResult<Confirmation> {
        decode_or_default(&self.post_form(Endpoint::SubmitDossier, payload).await?)
    }

    pub async fn vote(&self, artwork_id: u32) -> ApiResult<VoteReceipt> {
        let body = self
            .post_json(Endpoint::Vote, &json!({ "oeuvre_id": artwork_id }))
            .await?;
        decode_or_default(&body)
    }

    /// Image source URL. Never fetched through the client.
    pub fn image_url(&self, artwork_id: u32) -> String {
        Endpoint::ArtworkImage(artwork_id).url(&self.base_url)
    }

    // =========================================================================
    // Curation
    // =========================================================================

    /// Replace the server-side selection with `ids`.
    pub async fn finalize_selection(&self, ids: &[u32]) -> ApiResult<Confirmation> {
        let body = self
            .post_json(Endpoint::FinalizeSelection, &json!({ "selected_artworks": ids }))
            .await?;
        decode_or_default(&body)
    }

    /// Catalog of selected artworks, as PDF bytes.
    pub async fn generate_catalog(&self) -> ApiResult<Vec<u8>> {
        self.get(Endpoint::Catalog).await
    }

    pub async fn generate_artist_summary(&self, artist_id: u32) -> ApiResult<Vec<u8>> {
        self.get(Endpoint::ArtistSummary(artist_id)).await
    }

    pub async fn fetch_artists(&self) -> ApiResult<Vec<Artist>> {
        decode(&self.get(Endpoint::Artists).await?)
    }
}

/// Convert a payload to a reqwest multipart form.
fn multipart_form(payload: &FormPayload) -> Form {
    let mut form = Form::new();
    for (key, value) in payload.fields() {
        form = form.text(key.clone(), value.clone());
    }
    for (key, file) in payload.files() {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let part = match part.mime_str(&file.mime) {
            Ok(part) => part,
            Err(e) => {
                log::warn!("⚠️ Invalid MIME type '{}' for {}: {}", file.mime, key, e);
                Part::bytes(file.bytes.clone()).file_name(file.file_name.clone())
            }
        };
        form = form.part(key.clone(), part);
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{check_route, GuardDecision, Route, ADMIN_LOGIN_ROUTE};
    use crate::session::MemoryBackend;
    use crate::submission::{ArtistDossier, EntryField, FilePart};
    use axum::extract::{Multipart, Path, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorded {
        auth_headers: Mutex<Vec<Option<String>>>,
        multipart_keys: Mutex<Vec<String>>,
        finalized: Mutex<Vec<u32>>,
    }

    type Shared = Arc<Recorded>;

    fn artwork_json(id: u32, selected: bool) -> Value {
        json!({
            "id": id,
            "nom": format!("Oeuvre {}", id),
            "prix": 300.0,
            "technique": "Huile",
            "selectionne": selected,
            "votes": 1,
            "type_oeuvre": "Peinture",
            "artist": { "id": 10, "nom": "Durand", "prenom": "Alice", "nom_artiste": "Ali D", "email": "a@example.com" }
        })
    }

    async fn login(Json(body): Json<Value>) -> Response {
        if body["password"] == "secret" {
            Json(json!({
                "token": "tok-1",
                "user": { "id": 1, "username": "admin", "email": body["email"], "is_admin": true }
            }))
            .into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Identifiants invalides" }))).into_response()
        }
    }

    async fn artworks(State(rec): State<Shared>, headers: HeaderMap) -> Response {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let expired = auth.as_deref() == Some("Bearer expired");
        rec.auth_headers.lock().unwrap().push(auth);
        if expired {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expiré" }))).into_response();
        }
        Json(json!([artwork_json(1, true), artwork_json(2, false)])).into_response()
    }

    async fn artwork(Path(id): Path<u32>) -> Response {
        if id == 1 {
            Json(artwork_json(1, true)).into_response()
        } else {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "Œuvre introuvable" }))).into_response()
        }
    }

    async fn submit_dossier(State(rec): State<Shared>, mut multipart: Multipart) -> Json<Value> {
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let tagged = match field.file_name() {
                Some(file) => format!("{}@{}", name, file),
                None => name,
            };
            let _ = field.bytes().await;
            rec.multipart_keys.lock().unwrap().push(tagged);
        }
        Json(json!({ "message": "Dossier reçu" }))
    }

    async fn finalize(State(rec): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
        let ids = body["selected_artworks"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_u64()).map(|v| v as u32).collect())
            .unwrap_or_default();
        *rec.finalized.lock().unwrap() = ids;
        Json(json!({ "message": "ok" }))
    }

    async fn catalog() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4 test".to_vec())
    }

    async fn register(Json(body): Json<Value>) -> Response {
        if body["email"] == "taken@example.com" {
            return (StatusCode::CONFLICT, Json(json!({ "message": "Email déjà utilisé" }))).into_response();
        }
        Json(json!({
            "message": "created",
            "artist": {
                "id": 5,
                "nom": body["nom"],
                "prenom": body["prenom"],
                "nom_artiste": body["nom_artiste"],
                "email": body["email"],
                "type_artiste": body["type_artiste"]
            }
        }))
        .into_response()
    }

    async fn vote(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({ "vote_count": body["oeuvre_id"].as_u64().unwrap_or(0) + 1 }))
    }

    async fn spawn_server() -> (String, Shared) {
        let rec: Shared = Arc::new(Recorded::default());
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register/artist", post(register))
            .route("/api/artworks", get(artworks))
            .route("/api/artwork/{id}", get(artwork))
            .route("/api/submit-artwork", post(submit_dossier))
            .route("/api/selection/finalize", post(finalize))
            .route("/api/pdf/generate/catalog", get(catalog))
            .route("/api/vote", post(vote))
            .with_state(rec.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/api", addr), rec)
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: "admin@artcartel.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_session_and_sends_bearer() {
        let (base, rec) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        client.fetch_artworks().await.unwrap();
        let session = client.login(&credentials("secret")).await.unwrap();
        assert!(session.user.is_admin);
        assert_eq!(client.session().token().unwrap().as_deref(), Some("tok-1"));

        let artworks = client.fetch_artworks().await.unwrap();
        assert_eq!(artworks.len(), 2);

        let seen = rec.auth_headers.lock().unwrap().clone();
        assert_eq!(seen, vec![None, Some("Bearer tok-1".to_string())]);
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let (base, _) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        let err = client.login(&credentials("wrong")).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials(ref m) if m == "Identifiants invalides"));
        assert!(client.current_session().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_401_clears_session_and_guard_redirects() {
        let (base, _) = spawn_server().await;
        let backend = MemoryBackend::new();
        let store = SessionStore::new(&backend);
        store
            .save(&Session {
                token: "expired".into(),
                user: crate::models::User {
                    id: 1,
                    username: "admin".into(),
                    email: "admin@artcartel.com".into(),
                    is_admin: true,
                },
            })
            .unwrap();
        let client = ApiClient::new(base, store);
        assert!(check_route(Route::Admin, client.session()).is_allowed());

        let err = client.fetch_artworks().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(client.session().token().unwrap().is_none());
        assert!(client.session().user().unwrap().is_none());
        assert_eq!(
            check_route(Route::Admin, client.session()),
            GuardDecision::Redirect(ADMIN_LOGIN_ROUTE)
        );
    }

    #[tokio::test]
    async fn test_not_found_and_network_errors() {
        let (base, _) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        assert_eq!(client.fetch_artwork(1).await.unwrap().id, 1);
        let err = client.fetch_artwork(99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Œuvre introuvable"));

        let offline = ApiClient::new("http://127.0.0.1:1/api", SessionStore::new(MemoryBackend::new()));
        assert!(matches!(offline.fetch_artworks().await, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_dossier_multipart_layout() {
        let (base, rec) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        let mut dossier = ArtistDossier::new();
        dossier.nom = "Durand".into();
        dossier.set_entry_field(0, EntryField::Titre, "Marée basse").unwrap();
        dossier
            .set_entry_photo(0, Some(FilePart::from_name("maree.png", vec![1, 2, 3])))
            .unwrap();
        dossier.set_entry_field(1, EntryField::Technique, "orphan").unwrap();

        let reply = client.submit_dossier(&dossier.to_payload()).await.unwrap();
        assert_eq!(reply.message.as_deref(), Some("Dossier reçu"));

        let keys = rec.multipart_keys.lock().unwrap().clone();
        assert!(keys.contains(&"nom".to_string()));
        assert!(keys.contains(&"oeuvre1_titre".to_string()));
        assert!(keys.contains(&"oeuvre1_photo@maree.png".to_string()));
        assert!(!keys.iter().any(|k| k.starts_with("oeuvre2_")));
    }

    #[tokio::test]
    async fn test_selection_catalog_and_vote() {
        let (base, rec) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        client.finalize_selection(&[1, 4]).await.unwrap();
        assert_eq!(*rec.finalized.lock().unwrap(), vec![1, 4]);

        let pdf = client.generate_catalog().await.unwrap();
        assert!(pdf.starts_with(b"%PDF"));

        let receipt = client.vote(2).await.unwrap();
        assert_eq!(receipt.votes, Some(3));

        assert!(client.image_url(7).ends_with("/api/artwork/7/image"));
    }

    #[tokio::test]
    async fn test_register_artist() {
        let (base, _) = spawn_server().await;
        let client = ApiClient::new(base, SessionStore::new(MemoryBackend::new()));

        let mut artist = NewArtist {
            nom: "Durand".into(),
            prenom: "Alice".into(),
            nom_artiste: "Ali D".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
            telephone: String::new(),
            adresse: String::new(),
            type_artiste: crate::models::ArtistType::Painter,
        };
        let created = client.register_artist(&artist).await.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.type_artiste, Some(crate::models::ArtistType::Painter));

        artist.email = "taken@example.com".into();
        let err = client.register_artist(&artist).await.unwrap_err();
        assert_eq!(err.user_message("Erreur lors de l'inscription"), "Email déjà utilisé");
    }
}
