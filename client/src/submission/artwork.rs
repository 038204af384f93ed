//! Single artwork submission (`POST /artwork`).

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::models::ArtworkType;
use crate::submission::payload::{FilePart, FormPayload};

pub const MSG_ARTWORK_SENT: &str = "Votre œuvre a été soumise avec succès !";
pub const MSG_ARTWORK_FAILED: &str = "Erreur lors de la soumission";
pub const MSG_LOGIN_REQUIRED: &str = "Veuillez vous connecter pour soumettre une œuvre.";

/// Dimension keys of 2D works.
pub const FLAT_DIMENSION_KEYS: [&str; 4] = [
    "dimension_hors_cadre_hauteur",
    "dimension_hors_cadre_largeur",
    "dimension_avec_cadre_hauteur",
    "dimension_avec_cadre_largeur",
];

/// Dimension keys of sculptures.
pub const SCULPTURE_DIMENSION_KEYS: [&str; 5] = [
    "dimension_hauteur",
    "dimension_largeur",
    "dimension_longueur",
    "poids",
    "dimension_socle",
];

/// Field labels, as shown next to inputs.
pub fn dimension_label(key: &str) -> &'static str {
    match key {
        "dimension_hors_cadre_hauteur" => "Hauteur hors cadre (cm)",
        "dimension_hors_cadre_largeur" => "Largeur hors cadre (cm)",
        "dimension_avec_cadre_hauteur" => "Hauteur avec cadre (cm)",
        "dimension_avec_cadre_largeur" => "Largeur avec cadre (cm)",
        "dimension_hauteur" => "Hauteur (cm)",
        "dimension_largeur" => "Largeur (cm)",
        "dimension_longueur" => "Longueur (cm)",
        "poids" => "Poids (kg)",
        "dimension_socle" => "Dimensions du socle",
        _ => "",
    }
}

/// Raw form input. Everything is text until it reaches the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkSubmission {
    pub nom: String,
    pub prix: String,
    pub technique: String,
    pub type_oeuvre: Option<ArtworkType>,
    pub dimension_hors_cadre_hauteur: String,
    pub dimension_hors_cadre_largeur: String,
    pub dimension_avec_cadre_hauteur: String,
    pub dimension_avec_cadre_largeur: String,
    pub dimension_hauteur: String,
    pub dimension_largeur: String,
    pub dimension_longueur: String,
    pub poids: String,
    pub dimension_socle: String,
    #[serde(skip)]
    pub photo: Option<FilePart>,
}

impl ArtworkSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimension keys shown for the current type; none until a type is chosen.
    pub fn dimension_keys(&self) -> &'static [&'static str] {
        match self.type_oeuvre {
            Some(t) if t.is_sculpture() => &SCULPTURE_DIMENSION_KEYS[..],
            Some(_) => &FLAT_DIMENSION_KEYS[..],
            None => &[],
        }
    }

    pub fn dimension(&self, key: &str) -> Option<&str> {
        let value = match key {
            "dimension_hors_cadre_hauteur" => &self.dimension_hors_cadre_hauteur,
            "dimension_hors_cadre_largeur" => &self.dimension_hors_cadre_largeur,
            "dimension_avec_cadre_hauteur" => &self.dimension_avec_cadre_hauteur,
            "dimension_avec_cadre_largeur" => &self.dimension_avec_cadre_largeur,
            "dimension_hauteur" => &self.dimension_hauteur,
            "dimension_largeur" => &self.dimension_largeur,
            "dimension_longueur" => &self.dimension_longueur,
            "poids" => &self.poids,
            "dimension_socle" => &self.dimension_socle,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns `false` for an unknown key.
    pub fn set_dimension(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "dimension_hors_cadre_hauteur" => &mut self.dimension_hors_cadre_hauteur,
            "dimension_hors_cadre_largeur" => &mut self.dimension_hors_cadre_largeur,
            "dimension_avec_cadre_hauteur" => &mut self.dimension_avec_cadre_hauteur,
            "dimension_avec_cadre_largeur" => &mut self.dimension_avec_cadre_largeur,
            "dimension_hauteur" => &mut self.dimension_hauteur,
            "dimension_largeur" => &mut self.dimension_largeur,
            "dimension_longueur" => &mut self.dimension_longueur,
            "poids" => &mut self.poids,
            "dimension_socle" => &mut self.dimension_socle,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.nom.trim().is_empty() {
            missing.push("nom");
        }
        if self.prix.trim().is_empty() {
            missing.push("prix");
        }
        if self.type_oeuvre.is_none() {
            missing.push("type_oeuvre");
        }
        if self.photo.is_none() {
            missing.push("photo");
        }
        missing
    }

    /// Check required fields and build the multipart body.
    ///
    /// Only non-blank fields are sent, and only the dimension subset of the
    /// chosen type.
    pub fn to_payload(&self) -> FormResult<FormPayload> {
        let missing = self.missing_fields();
        let (kind, photo) = match (self.type_oeuvre, &self.photo) {
            (Some(kind), Some(photo)) if missing.is_empty() => (kind, photo),
            _ => return Err(FormError::MissingRequired(missing)),
        };

        let mut payload = FormPayload::new();
        payload
            .text_if_present("nom", &self.nom)
            .text_if_present("prix", &self.prix)
            .text_if_present("technique", &self.technique)
            .text("type_oeuvre", kind.as_str());
        for key in self.dimension_keys() {
            if let Some(value) = self.dimension(key) {
                payload.text_if_present(*key, value);
            }
        }
        payload.file("photo", photo.clone());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> FilePart {
        FilePart::from_name("torse.jpg", vec![0xff, 0xd8])
    }

    #[test]
    fn test_missing_required_fields() {
        let mut form = ArtworkSubmission::new();
        form.nom = "Torse".into();
        assert_eq!(
            form.to_payload(),
            Err(FormError::MissingRequired(vec!["prix", "type_oeuvre", "photo"]))
        );
        assert_eq!(
            form.to_payload().unwrap_err().to_string(),
            "Veuillez remplir tous les champs obligatoires"
        );
    }

    #[test]
    fn test_sculpture_sends_only_volume_fields() {
        let mut form = ArtworkSubmission::new();
        form.nom = "Torse".into();
        form.prix = "1200".into();
        form.type_oeuvre = Some(ArtworkType::Sculpture);
        form.photo = Some(photo());
        assert!(form.set_dimension("dimension_hauteur", "120"));
        assert!(form.set_dimension("poids", "80"));
        // left over from a previous type choice
        form.set_dimension("dimension_hors_cadre_hauteur", "50");

        let p = form.to_payload().unwrap();
        assert_eq!(p.get("type_oeuvre"), Some("Sculpture"));
        assert_eq!(p.get("dimension_hauteur"), Some("120"));
        assert_eq!(p.get("poids"), Some("80"));
        assert_eq!(p.get("dimension_largeur"), None);
        assert_eq!(p.get("dimension_hors_cadre_hauteur"), None);
        assert_eq!(p.get("technique"), None);
        assert!(p.has_file("photo"));
    }

    #[test]
    fn test_flat_dimension_keys() {
        let mut form = ArtworkSubmission::new();
        assert!(form.dimension_keys().is_empty());
        form.type_oeuvre = Some(ArtworkType::Photo);
        assert_eq!(form.dimension_keys(), &FLAT_DIMENSION_KEYS[..]);
        assert!(!form.set_dimension("couleur", "bleu"));
        assert_eq!(dimension_label("poids"), "Poids (kg)");
    }
}
