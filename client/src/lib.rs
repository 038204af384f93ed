//! # Cartel - art exhibition submission and curation client
//!
//! Artists register and submit artworks (or a full dossier of up to ten);
//! admins browse every submission, shortlist a selection and export a
//! catalog PDF. All data lives on a REST server; this crate is the client.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Forms/Views │────▶│  Payloads   │────▶│  Transport  │────▶│ REST server │
//! │  (intents)  │     │ (FormPayload│     │ (reqwest or │     │   (/api)    │
//! │             │◀────│  / serde)   │◀────│  gloo-net)  │◀────│             │
//! └─────────────┘     └─────────────┘     └──────┬──────┘     └─────────────┘
//!                                                │ token / 401
//!                                         ┌──────▼──────┐
//!                                         │SessionStore │
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cartel::{ApiClient, Config, Credentials, FileBackend, SessionStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let store = SessionStore::new(FileBackend::new(&config.session_file));
//!     let client = ApiClient::new(config.api_url, store);
//!     client.login(&Credentials { email: "admin@artcartel.com".into(), password: "...".into() }).await.unwrap();
//!     println!("{} artworks", client.fetch_artworks().await.unwrap().len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`models`] - Artists, artworks, users
//! - [`session`] - Token and user persistence
//! - [`guard`] - Route table and access gates
//! - [`api`] - Endpoints, response handling, native HTTP client
//! - [`submission`] - Registration, login, artwork and dossier forms
//! - [`curation`] - Admin dashboards state
//!
//! The `native` feature (default) adds the `reqwest` client, [`config`] and
//! the `cartel` binary. The browser frontend depends on this crate without it.

// Core modules
pub mod error;
pub mod models;
pub mod session;
pub mod guard;

// HTTP API
pub mod api;

// Forms
pub mod submission;

// Admin dashboards
pub mod curation;

// Configuration
#[cfg(feature = "native")]
pub mod config;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ApiError, ApiResult, CliError, ConfigError, FormError, FormResult, SessionError,
    SessionResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Artist, ArtistType, Artwork, ArtworkType, Confirmation, Credentials, Dimensions, NewArtist,
    Session, User, VoteReceipt,
};

// =============================================================================
// Re-exports - Session & Guard
// =============================================================================

pub use session::{FileBackend, MemoryBackend, SessionStore, StorageBackend, TOKEN_KEY, USER_KEY};

pub use guard::{
    check_route, guard_admin, guard_admin_user, guard_artist, GuardDecision, Route,
    ADMIN_LOGIN_ROUTE, LOGIN_ROUTE,
};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::{check_status, Endpoint, Method};

#[cfg(feature = "native")]
pub use api::ApiClient;

#[cfg(feature = "native")]
pub use config::Config;

// =============================================================================
// Re-exports - Forms
// =============================================================================

pub use submission::{
    ArtistDossier, ArtworkSubmission, Civilite, DossierEntry, EntryField, FilePart, FormPayload,
    LoginForm, RegistrationForm, DOSSIER_SLOTS,
};

// =============================================================================
// Re-exports - Curation
// =============================================================================

pub use curation::{
    ArtistListIntent, ArtistListState, CurationIntent, CurationState, Modal, Notification,
    PageSize, Pagination, SelectionSet, Severity, Tab, CATALOG_FILE_NAME,
};
