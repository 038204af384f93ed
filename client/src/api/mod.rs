//! HTTP API access.
//!
//! The endpoint table and response interpretation are shared with the
//! browser frontend. The `reqwest` transport is native only.
//!
//! # API Endpoints
//!
//! | Method | Path                                   | Description                  |
//! |--------|----------------------------------------|------------------------------|
//! | POST   | `/auth/login`                          | Token + user profile         |
//! | POST   | `/auth/register/artist`                | Create an artist account     |
//! | GET    | `/artworks`                            | Every artwork                |
//! | GET    | `/artwork/{id}`                        | One artwork                  |
//! | POST   | `/artwork`                             | Submit one artwork           |
//! | POST   | `/vote`                                | Vote for an artwork          |
//! | POST   | `/selection/finalize`                  | Replace the selection        |
//! | GET    | `/pdf/generate/catalog`                | Catalog PDF                  |
//! | GET    | `/pdf/generate/artist-summary/{id}`    | Artist summary PDF           |
//! | GET    | `/artists`                             | Every artist                 |
//! | POST   | `/submit-artwork`                      | Submit a full dossier        |
//! | GET    | `/artwork/{id}/image`                  | Artwork image                |

#[cfg(feature = "native")]
mod client;
pub mod endpoints;
pub mod response;

#[cfg(feature = "native")]
pub use client::ApiClient;
pub use endpoints::{Endpoint, Method};
pub use response::{
    check_status, decode, decode_artist, decode_artworks, decode_or_default, extract_message,
};
