//! Central interpretation of HTTP responses, shared by every transport.
//!
//! Transports hand over the status and the raw body. A 401 maps to
//! [`ApiError::Unauthorized`], except on login where it means bad
//! credentials. Clearing the session is the transport's job since only it
//! holds the store.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::endpoints::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::guard::LOGIN_ROUTE;
use crate::models::{Artist, Artwork};
use crate::submission::MSG_LOGIN_FAILED;

/// Fallback when a rejection carries no message.
pub const GENERIC_VALIDATION_MESSAGE: &str = "Données invalides";

/// `message` or `error` field of a JSON error body.
pub fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| v.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
}

/// Map a non-success status to an error. `Ok(())` for 2xx.
pub fn check_status(endpoint: Endpoint, status: u16, body: &[u8]) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 if endpoint == Endpoint::Login => Err(ApiError::InvalidCredentials(
            extract_message(body).unwrap_or_else(|| MSG_LOGIN_FAILED.to_string()),
        )),
        401 => Err(ApiError::Unauthorized {
            redirect: LOGIN_ROUTE,
        }),
        404 => Err(ApiError::NotFound(
            extract_message(body).unwrap_or_else(|| endpoint.subject()),
        )),
        400 | 409 | 422 => Err(ApiError::Validation(
            extract_message(body).unwrap_or_else(|| GENERIC_VALIDATION_MESSAGE.to_string()),
        )),
        _ => Err(ApiError::Server {
            status,
            message: extract_message(body)
                .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string()),
        }),
    }
}

/// Decode a successful JSON body.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a body that may legitimately be empty.
pub fn decode_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    decode(body)
}

/// Registration replies either with the artist record or wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RegisteredArtist {
    Wrapped { artist: Artist },
    Bare(Artist),
}

/// Decode the reply to `POST /auth/register/artist`.
pub fn decode_artist(body: &[u8]) -> ApiResult<Artist> {
    Ok(match decode(body)? {
        RegisteredArtist::Wrapped { artist } | RegisteredArtist::Bare(artist) => artist,
    })
}

/// Decode the artwork list. Rows that do not decode (unknown
/// `type_oeuvre`, missing artist) are logged and skipped.
pub fn decode_artworks(body: &[u8]) -> ApiResult<Vec<Artwork>> {
    let rows: Vec<Value> = decode(body)?;
    let total = rows.len();
    let artworks: Vec<Artwork> = rows
        .into_iter()
        .filter_map(|row| {
            let id = row.get("id").cloned().unwrap_or(Value::Null);
            serde_json::from_value(row)
                .map_err(|e| log::warn!("⚠️ Skipping artwork {}: {}", id, e))
                .ok()
        })
        .collect();
    if artworks.len() < total {
        log::warn!("⚠️ {} of {} artworks could not be read", total - artworks.len(), total);
    }
    Ok(artworks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confirmation;

    #[test]
    fn test_status_mapping() {
        assert!(check_status(Endpoint::Artworks, 204, b"").is_ok());

        let err = check_status(Endpoint::Artworks, 401, b"").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { redirect: "/connexion" }));

        let err = check_status(Endpoint::Login, 401, b"{}").unwrap_err();
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Email ou mot de passe incorrect");

        let err = check_status(Endpoint::Artwork(9), 404, b"").unwrap_err();
        assert_eq!(err.to_string(), "Not found: artwork 9");

        let body = r#"{"message":"Email déjà utilisé"}"#;
        let err = check_status(Endpoint::RegisterArtist, 409, body.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Email déjà utilisé");

        let err = check_status(Endpoint::Login, 400, br#"{"error":"Identifiants invalides"}"#).unwrap_err();
        assert_eq!(err.user_message("x"), "Identifiants invalides");

        let err = check_status(Endpoint::Catalog, 500, b"boom").unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, ref message } if message == "boom"));
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(br#"{"message":"a","error":"b"}"#).as_deref(), Some("a"));
        assert_eq!(extract_message(br#"{"message":"","error":"b"}"#), None);
        assert_eq!(extract_message(b"<html>"), None);
        assert_eq!(extract_message(br#"{"error":{"code":1}}"#), None);
    }

    #[test]
    fn test_decode_empty_body() {
        let c: Confirmation = decode_or_default(b"  ").unwrap();
        assert!(c.message.is_none());
        assert!(matches!(decode::<Confirmation>(b"nope"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_artist_either_shape() {
        let bare = r#"{"id":3,"nom":"Durand","prenom":"Léa","nom_artiste":"Lea D"}"#.as_bytes();
        let wrapped =
            r#"{"message":"ok","artist":{"id":3,"nom":"Durand","prenom":"Léa","nom_artiste":"Lea D"}}"#.as_bytes();
        assert_eq!(decode_artist(bare).unwrap(), decode_artist(wrapped).unwrap());
        assert_eq!(decode_artist(bare).unwrap().nom_artiste, "Lea D");
    }

    #[test]
    fn test_decode_artworks_skips_unreadable_rows() {
        let body = serde_json::json!([
            { "id": 1, "nom": "Marée", "type_oeuvre": "Peinture",
              "artist": { "id": 3, "nom": "Durand", "prenom": "Léa", "nom_artiste": "Lea D" } },
            { "id": 2, "nom": "Tenture", "type_oeuvre": "Tapisserie",
              "artist": { "id": 3, "nom": "Durand", "prenom": "Léa", "nom_artiste": "Lea D" } },
            { "id": 4, "nom": "Sans artiste", "type_oeuvre": "Photo" }
        ])
        .to_string();

        let artworks = decode_artworks(body.as_bytes()).unwrap();
        assert_eq!(artworks.len(), 1);
        assert_eq!(artworks[0].id, 1);

        assert!(decode_artworks(b"[]").unwrap().is_empty());
        assert!(matches!(decode_artworks(br#"{"id":1}"#), Err(ApiError::Decode(_))));
    }
}
