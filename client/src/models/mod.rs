//! Domain models for the exhibition API.
//!
//! Wire names follow the server (French field names); Rust names follow
//! the domain:
//!
//! - [`Artist`] - Registered artist with classification
//! - [`Artwork`] - Submitted artwork with typed [`Dimensions`]
//! - [`ArtistType`] / [`ArtworkType`] - Fixed enumerations
//! - [`User`] / [`Session`] - Authenticated user and token
//! - [`NewArtist`] - Registration payload

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

// =============================================================================
// Artist Type
// =============================================================================

/// Classification of an artist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtistType {
    #[serde(rename = "Peintre")]
    Painter,
    #[serde(rename = "Photographe")]
    Photographer,
    #[serde(rename = "Numérique")]
    Digital,
    #[serde(rename = "Sculpteur")]
    Sculptor,
}

impl ArtistType {
    /// All values, in form order.
    pub const ALL: [ArtistType; 4] = [
        ArtistType::Painter,
        ArtistType::Photographer,
        ArtistType::Digital,
        ArtistType::Sculptor,
    ];

    /// Value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistType::Painter => "Peintre",
            ArtistType::Photographer => "Photographe",
            ArtistType::Digital => "Numérique",
            ArtistType::Sculptor => "Sculpteur",
        }
    }

    /// Label shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            ArtistType::Digital => "Artiste Numérique",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ArtistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtistType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Peintre" | "peintre" | "painter" => Ok(ArtistType::Painter),
            "Photographe" | "photographe" | "photographer" => Ok(ArtistType::Photographer),
            "Numérique" | "numérique" | "numerique" | "digital" => Ok(ArtistType::Digital),
            "Sculpteur" | "sculpteur" | "sculptor" => Ok(ArtistType::Sculptor),
            other => Err(FormError::InvalidChoice {
                field: "type_artiste",
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Artwork Type
// =============================================================================

/// Type tag of an artwork. Decides which dimension fields apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtworkType {
    #[serde(rename = "Peinture")]
    Painting,
    #[serde(rename = "Photo")]
    Photo,
    #[serde(rename = "Numérique")]
    Digital,
    #[serde(rename = "Sculpture")]
    Sculpture,
}

impl ArtworkType {
    /// All values, in form order.
    pub const ALL: [ArtworkType; 4] = [
        ArtworkType::Painting,
        ArtworkType::Photo,
        ArtworkType::Digital,
        ArtworkType::Sculpture,
    ];

    /// Value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkType::Painting => "Peinture",
            ArtworkType::Photo => "Photo",
            ArtworkType::Digital => "Numérique",
            ArtworkType::Sculpture => "Sculpture",
        }
    }

    /// Label shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            ArtworkType::Photo => "Photographie",
            ArtworkType::Digital => "Art Numérique",
            other => other.as_str(),
        }
    }

    /// Sculptures are measured in volume, everything else as a flat surface.
    pub fn is_sculpture(&self) -> bool {
        matches!(self, ArtworkType::Sculpture)
    }
}

impl fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtworkType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Peinture" | "peinture" | "painting" => Ok(ArtworkType::Painting),
            "Photo" | "photo" => Ok(ArtworkType::Photo),
            "Numérique" | "numérique" | "numerique" | "digital" => Ok(ArtworkType::Digital),
            "Sculpture" | "sculpture" => Ok(ArtworkType::Sculpture),
            other => Err(FormError::InvalidChoice {
                field: "type_oeuvre",
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Artist
// =============================================================================

/// A registered artist, as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub id: u32,
    /// Last name.
    #[serde(default)]
    pub nom: String,
    /// First name.
    #[serde(default)]
    pub prenom: String,
    /// Display name used in listings and the catalog.
    #[serde(default)]
    pub nom_artiste: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    /// Unknown or empty values from older records decode as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_artist_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_artiste: Option<ArtistType>,
}

impl Artist {
    /// "Nom Prénom", as shown under artwork thumbnails.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom).trim().to_string()
    }

    /// Phone for the detail dialog.
    pub fn telephone_display(&self) -> &str {
        non_empty(self.telephone.as_deref()).unwrap_or("Non renseigné")
    }

    /// Address for the detail dialog.
    pub fn adresse_display(&self) -> &str {
        non_empty(self.adresse.as_deref()).unwrap_or("Non renseignée")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_artist_type<'de, D>(deserializer: D) -> Result<Option<ArtistType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Registration payload for `POST /auth/register/artist`.
///
/// The password is write-only: it is never part of any record read back.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewArtist {
    pub nom: String,
    pub prenom: String,
    pub nom_artiste: String,
    pub email: String,
    pub password: String,
    pub telephone: String,
    pub adresse: String,
    pub type_artiste: ArtistType,
}

// =============================================================================
// Dimensions
// =============================================================================

/// Measurements of an artwork. Exactly one variant applies, chosen by the
/// artwork's [`ArtworkType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dimensions {
    /// Paintings, photos and digital works, in centimetres.
    Flat {
        unframed_height: Option<f64>,
        unframed_width: Option<f64>,
        framed_height: Option<f64>,
        framed_width: Option<f64>,
    },
    /// Sculptures: volume in centimetres, weight in kilograms, free-text base.
    Sculpture {
        height: Option<f64>,
        width: Option<f64>,
        length: Option<f64>,
        weight: Option<f64>,
        base: Option<String>,
    },
}

impl Dimensions {
    /// Human-readable lines for the detail view.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self {
            Dimensions::Flat {
                unframed_height,
                unframed_width,
                framed_height,
                framed_width,
            } => {
                lines.push(format!(
                    "Dimensions hors cadre: {}h x {}l cm",
                    fmt_measure(*unframed_height),
                    fmt_measure(*unframed_width)
                ));
                if framed_height.is_some() {
                    lines.push(format!(
                        "Dimensions avec cadre: {}h x {}l cm",
                        fmt_measure(*framed_height),
                        fmt_measure(*framed_width)
                    ));
                }
            }
            Dimensions::Sculpture {
                height,
                width,
                length,
                weight,
                base,
            } => {
                lines.push(format!(
                    "Dimensions: {}h x {}l x {}L cm",
                    fmt_measure(*height),
                    fmt_measure(*width),
                    fmt_measure(*length)
                ));
                if let Some(w) = weight {
                    lines.push(format!("Poids: {} kg", w));
                }
                if let Some(b) = base.as_deref().filter(|b| !b.is_empty()) {
                    lines.push(format!("Dimensions du socle: {}", b));
                }
            }
        }
        lines
    }
}

fn fmt_measure(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}

// =============================================================================
// Artwork
// =============================================================================

/// A submitted artwork.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ArtworkWire", into = "ArtworkWire")]
pub struct Artwork {
    pub id: u32,
    /// Title.
    pub nom: String,
    pub prix: Option<f64>,
    pub technique: String,
    pub photo_path: Option<String>,
    /// Submission timestamp as sent by the server.
    pub date_soumission: Option<String>,
    /// Server-side selection flag.
    pub selectionne: bool,
    pub votes: u32,
    pub artist: Artist,
    pub type_oeuvre: ArtworkType,
    pub dimensions: Dimensions,
}

impl Artwork {
    /// Submission date, accepting RFC3339 and naive ISO timestamps.
    pub fn submitted_on(&self) -> Option<chrono::NaiveDate> {
        let raw = self.date_soumission.as_deref()?;
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Price label, e.g. "450 €".
    pub fn price_label(&self) -> String {
        match self.prix {
            Some(p) => format!("{} €", p),
            None => "— €".to_string(),
        }
    }

    /// Status chip label.
    pub fn status_label(&self) -> &'static str {
        if self.selectionne {
            "Sélectionné"
        } else {
            "Non sélectionné"
        }
    }
}

/// Flat wire shape of an artwork, with every dimension column optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArtworkWire {
    id: u32,
    #[serde(default)]
    nom: String,
    #[serde(default)]
    prix: Option<f64>,
    #[serde(default)]
    technique: Option<String>,
    #[serde(default)]
    photo_path: Option<String>,
    #[serde(default)]
    date_soumission: Option<String>,
    #[serde(default)]
    selectionne: bool,
    #[serde(default)]
    votes: u32,
    artist: Artist,
    type_oeuvre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_hors_cadre_hauteur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_hors_cadre_largeur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_avec_cadre_hauteur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_avec_cadre_largeur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_hauteur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_largeur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_longueur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poids: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dimension_socle: Option<String>,
}

impl TryFrom<ArtworkWire> for Artwork {
    type Error = FormError;

    fn try_from(w: ArtworkWire) -> Result<Self, Self::Error> {
        let type_oeuvre: ArtworkType = w.type_oeuvre.parse()?;
        // Columns of the other subset are dropped here.
        let dimensions = if type_oeuvre.is_sculpture() {
            Dimensions::Sculpture {
                height: w.dimension_hauteur,
                width: w.dimension_largeur,
                length: w.dimension_longueur,
                weight: w.poids,
                base: w.dimension_socle,
            }
        } else {
            Dimensions::Flat {
                unframed_height: w.dimension_hors_cadre_hauteur,
                unframed_width: w.dimension_hors_cadre_largeur,
                framed_height: w.dimension_avec_cadre_hauteur,
                framed_width: w.dimension_avec_cadre_largeur,
            }
        };

        Ok(Artwork {
            id: w.id,
            nom: w.nom,
            prix: w.prix,
            technique: w.technique.unwrap_or_default(),
            photo_path: w.photo_path,
            date_soumission: w.date_soumission,
            selectionne: w.selectionne,
            votes: w.votes,
            artist: w.artist,
            type_oeuvre,
            dimensions,
        })
    }
}

impl From<Artwork> for ArtworkWire {
    fn from(a: Artwork) -> Self {
        let mut wire = ArtworkWire {
            id: a.id,
            nom: a.nom,
            prix: a.prix,
            technique: Some(a.technique),
            photo_path: a.photo_path,
            date_soumission: a.date_soumission,
            selectionne: a.selectionne,
            votes: a.votes,
            artist: a.artist,
            type_oeuvre: a.type_oeuvre.as_str().to_string(),
            dimension_hors_cadre_hauteur: None,
            dimension_hors_cadre_largeur: None,
            dimension_avec_cadre_hauteur: None,
            dimension_avec_cadre_largeur: None,
            dimension_hauteur: None,
            dimension_largeur: None,
            dimension_longueur: None,
            poids: None,
            dimension_socle: None,
        };
        match a.dimensions {
            Dimensions::Flat {
                unframed_height,
                unframed_width,
                framed_height,
                framed_width,
            } => {
                wire.dimension_hors_cadre_hauteur = unframed_height;
                wire.dimension_hors_cadre_largeur = unframed_width;
                wire.dimension_avec_cadre_hauteur = framed_height;
                wire.dimension_avec_cadre_largeur = framed_width;
            }
            Dimensions::Sculpture {
                height,
                width,
                length,
                weight,
                base,
            } => {
                wire.dimension_hauteur = height;
                wire.dimension_largeur = width;
                wire.dimension_longueur = length;
                wire.poids = weight;
                wire.dimension_socle = base;
            }
        }
        wire
    }
}

// =============================================================================
// Users & Sessions
// =============================================================================

/// Authenticated user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Token plus the user it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Misc responses
// =============================================================================

/// Reply to `POST /vote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteReceipt {
    #[serde(default, alias = "vote_count", alias = "total_votes")]
    pub votes: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement (selection finalize, dossier submission).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artist_json() -> serde_json::Value {
        json!({
            "id": 7,
            "nom": "Durand",
            "prenom": "Alice",
            "nom_artiste": "Ali D",
            "email": "alice@example.com",
            "type_artiste": "Peintre"
        })
    }

    #[test]
    fn test_flat_artwork_ignores_sculpture_columns() {
        let json = json!({
            "id": 1,
            "nom": "Marée basse",
            "prix": 450.0,
            "technique": "Huile sur toile",
            "photo_path": "uploads/artworks/maree.jpg",
            "date_soumission": "2025-03-01T10:15:00",
            "selectionne": true,
            "votes": 3,
            "artist": artist_json(),
            "type_oeuvre": "Peinture",
            "dimension_hors_cadre_hauteur": 50.0,
            "dimension_hors_cadre_largeur": 70.0,
            "poids": 12.0
        });

        let artwork: Artwork = serde_json::from_value(json).unwrap();
        assert_eq!(artwork.type_oeuvre, ArtworkType::Painting);
        assert_eq!(
            artwork.dimensions,
            Dimensions::Flat {
                unframed_height: Some(50.0),
                unframed_width: Some(70.0),
                framed_height: None,
                framed_width: None,
            }
        );
        assert_eq!(
            artwork.submitted_on(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
        );

        let back = serde_json::to_value(&artwork).unwrap();
        assert!(back.get("poids").is_none());
        assert_eq!(back["type_oeuvre"], "Peinture");
        assert_eq!(back["dimension_hors_cadre_largeur"], 70.0);
    }

    #[test]
    fn test_sculpture_dimensions() {
        let json = json!({
            "id": 2,
            "nom": "Torse",
            "artist": artist_json(),
            "type_oeuvre": "Sculpture",
            "dimension_hauteur": 120.0,
            "dimension_largeur": 40.0,
            "dimension_longueur": 35.0,
            "poids": 80.5,
            "dimension_socle": "40x40",
            "dimension_hors_cadre_hauteur": 10.0
        });

        let artwork: Artwork = serde_json::from_value(json).unwrap();
        let lines = artwork.dimensions.describe();
        assert_eq!(lines[0], "Dimensions: 120h x 40l x 35L cm");
        assert!(lines.contains(&"Poids: 80.5 kg".to_string()));
        assert!(lines.contains(&"Dimensions du socle: 40x40".to_string()));
        assert!(!artwork.selectionne);
        assert_eq!(artwork.votes, 0);
    }

    #[test]
    fn test_unknown_artwork_type_is_rejected() {
        let json = json!({
            "id": 3,
            "nom": "?",
            "artist": artist_json(),
            "type_oeuvre": "Tapisserie"
        });
        assert!(serde_json::from_value::<Artwork>(json).is_err());
    }

    #[test]
    fn test_artist_lenient_type_and_placeholders() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 9,
            "nom": "Martin",
            "prenom": "Léa",
            "nom_artiste": "LM",
            "email": "lea@example.com",
            "telephone": "",
            "type_artiste": ""
        }))
        .unwrap();

        assert_eq!(artist.type_artiste, None);
        assert_eq!(artist.telephone_display(), "Non renseigné");
        assert_eq!(artist.adresse_display(), "Non renseignée");
        assert_eq!(artist.full_name(), "Martin Léa");
    }

    #[test]
    fn test_type_labels_and_parsing() {
        assert_eq!(ArtistType::Digital.label(), "Artiste Numérique");
        assert_eq!(ArtworkType::Photo.label(), "Photographie");
        assert_eq!("Sculpteur".parse::<ArtistType>(), Ok(ArtistType::Sculptor));
        assert!("Potier".parse::<ArtistType>().is_err());
        assert_eq!(
            serde_json::to_value(ArtworkType::Digital).unwrap(),
            json!("Numérique")
        );
    }

    #[test]
    fn test_vote_receipt_aliases() {
        let receipt: VoteReceipt = serde_json::from_value(json!({ "vote_count": 4 })).unwrap();
        assert_eq!(receipt.votes, Some(4));
    }
}
