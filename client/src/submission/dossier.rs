//! Artist dossier: identity, catalog preferences and up to ten artworks,
//! posted as one multipart request to `/submit-artwork`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::submission::payload::{FilePart, FormPayload};

/// Number of artwork slots in a dossier.
pub const DOSSIER_SLOTS: usize = 10;

pub const MSG_DOSSIER_SENT: &str =
    "Votre dossier a été soumis avec succès. Un email de confirmation vous a été envoyé.";
pub const MSG_DOSSIER_FAILED: &str = "Une erreur est survenue";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Civilite {
    #[default]
    Madame,
    Mademoiselle,
    Monsieur,
}

impl Civilite {
    pub const ALL: [Civilite; 3] = [Civilite::Madame, Civilite::Mademoiselle, Civilite::Monsieur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Civilite::Madame => "Madame",
            Civilite::Mademoiselle => "Mademoiselle",
            Civilite::Monsieur => "Monsieur",
        }
    }
}

impl fmt::Display for Civilite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Civilite {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Civilite::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::InvalidChoice {
                field: "civilite",
                value: s.to_string(),
            })
    }
}

/// One artwork slot. Ignored on submission while `titre` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DossierEntry {
    pub titre: String,
    pub technique: String,
    /// Free text, e.g. "50 x 70 cm".
    pub dimensions: String,
    pub prix: String,
    #[serde(skip)]
    pub photo: Option<FilePart>,
}

impl DossierEntry {
    pub fn is_filled(&self) -> bool {
        !self.titre.trim().is_empty()
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Titre => &self.titre,
            EntryField::Technique => &self.technique,
            EntryField::Dimensions => &self.dimensions,
            EntryField::Prix => &self.prix,
        }
    }
}

/// Editable field of a dossier slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Titre,
    Technique,
    Dimensions,
    Prix,
}

impl EntryField {
    pub const ALL: [EntryField; 4] = [
        EntryField::Titre,
        EntryField::Technique,
        EntryField::Dimensions,
        EntryField::Prix,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EntryField::Titre => "titre",
            EntryField::Technique => "technique",
            EntryField::Dimensions => "dimensions",
            EntryField::Prix => "prix",
        }
    }
}

/// Wire key of a slot field: `oeuvre{n}_{field}` with `n` starting at 1.
pub fn slot_key(index: usize, field: &str) -> String {
    format!("oeuvre{}_{}", index + 1, field)
}

/// Artist identity and catalog preferences.
///
/// Field names follow the wire keys; see [`ArtistDossier::to_payload`] for
/// the exact mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistDossier {
    pub numero_dossier: String,
    pub civilite: Civilite,
    pub nom: String,
    pub categorie: String,
    pub prenom: String,
    pub nom_artiste: String,
    pub prenom_artiste: String,
    pub adresse: String,
    pub code_postal: String,
    pub ville: String,
    pub pays: String,
    pub telephone: String,
    pub email: String,
    pub site_internet: String,
    pub facebook: String,
    pub numero_mda: String,
    pub numero_siret: String,
    pub edition_adresse: bool,
    pub edition_telephone: bool,
    pub edition_email: bool,
    pub edition_site: bool,
    pub edition_facebook: bool,
    pub nom_catalogue: String,
    pub oeuvres: Vec<DossierEntry>,
}

impl Default for ArtistDossier {
    fn default() -> Self {
        Self {
            numero_dossier: String::new(),
            civilite: Civilite::default(),
            nom: String::new(),
            categorie: String::new(),
            prenom: String::new(),
            nom_artiste: String::new(),
            prenom_artiste: String::new(),
            adresse: String::new(),
            code_postal: String::new(),
            ville: String::new(),
            pays: String::new(),
            telephone: String::new(),
            email: String::new(),
            site_internet: String::new(),
            facebook: String::new(),
            numero_mda: String::new(),
            numero_siret: String::new(),
            edition_adresse: false,
            edition_telephone: false,
            edition_email: false,
            edition_site: false,
            edition_facebook: false,
            nom_catalogue: String::new(),
            oeuvres: vec![DossierEntry::default(); DOSSIER_SLOTS],
        }
    }
}

impl ArtistDossier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text fields and their wire keys, in form order.
    fn text_fields(&self) -> [(&'static str, &str); 17] {
        [
            ("numeroDossier", self.numero_dossier.as_str()),
            ("civilite", self.civilite.as_str()),
            ("nom", self.nom.as_str()),
            ("categorie", self.categorie.as_str()),
            ("prenom", self.prenom.as_str()),
            ("nomArtiste", self.nom_artiste.as_str()),
            ("prenomArtiste", self.prenom_artiste.as_str()),
            ("adresse", self.adresse.as_str()),
            ("codePostal", self.code_postal.as_str()),
            ("ville", self.ville.as_str()),
            ("pays", self.pays.as_str()),
            ("telephone", self.telephone.as_str()),
            ("email", self.email.as_str()),
            ("siteInternet", self.site_internet.as_str()),
            ("facebook", self.facebook.as_str()),
            ("numeroMDA", self.numero_mda.as_str()),
            ("numeroSIRET", self.numero_siret.as_str()),
        ]
    }

    fn flags(&self) -> [(&'static str, bool); 5] {
        [
            ("editionAdresse", self.edition_adresse),
            ("editionTelephone", self.edition_telephone),
            ("editionEmail", self.edition_email),
            ("editionSite", self.edition_site),
            ("editionFacebook", self.edition_facebook),
        ]
    }

    pub fn entry(&self, index: usize) -> FormResult<&DossierEntry> {
        self.oeuvres.get(index).ok_or(FormError::NoSuchSlot(index))
    }

    pub fn entry_mut(&mut self, index: usize) -> FormResult<&mut DossierEntry> {
        self.oeuvres.get_mut(index).ok_or(FormError::NoSuchSlot(index))
    }

    /// Set one text field of slot `index`.
    pub fn set_entry_field(&mut self, index: usize, field: EntryField, value: impl Into<String>) -> FormResult<()> {
        let entry = self.entry_mut(index)?;
        let value = value.into();
        match field {
            EntryField::Titre => entry.titre = value,
            EntryField::Technique => entry.technique = value,
            EntryField::Dimensions => entry.dimensions = value,
            EntryField::Prix => entry.prix = value,
        }
        Ok(())
    }

    pub fn set_entry_photo(&mut self, index: usize, photo: Option<FilePart>) -> FormResult<()> {
        self.entry_mut(index)?.photo = photo;
        Ok(())
    }

    /// Pad or cut the slot list back to [`DOSSIER_SLOTS`].
    pub fn normalize_slots(&mut self) {
        self.oeuvres.resize_with(DOSSIER_SLOTS, DossierEntry::default);
    }

    pub fn filled_entries(&self) -> usize {
        self.oeuvres.iter().filter(|e| e.is_filled()).count()
    }

    /// Build the multipart body.
    ///
    /// Blank artist text fields are skipped, flags always go out. A slot
    /// with a title sends all four text fields, even blank ones, plus its
    /// photo when one is attached.
    pub fn to_payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();

        for (key, value) in self.text_fields() {
            payload.text_if_present(key, value);
        }
        for (key, value) in self.flags() {
            payload.flag(key, value);
        }
        payload.text_if_present("nomCatalogue", &self.nom_catalogue);

        for (index, entry) in self.oeuvres.iter().take(DOSSIER_SLOTS).enumerate() {
            if !entry.is_filled() {
                continue;
            }
            for field in EntryField::ALL {
                payload.text(slot_key(index, field.key()), entry.field(field));
            }
            if let Some(photo) = &entry.photo {
                payload.file(slot_key(index, "photo"), photo.clone());
            }
        }

        log::debug!(
            "📦 Dossier payload: {} fields, {} files",
            payload.fields().len(),
            payload.files().len()
        );
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dossier_has_ten_slots() {
        let d = ArtistDossier::new();
        assert_eq!(d.oeuvres.len(), DOSSIER_SLOTS);
        assert_eq!(d.civilite, Civilite::Madame);
        assert_eq!(d.filled_entries(), 0);
    }

    #[test]
    fn test_artist_fields_use_wire_keys() {
        let mut d = ArtistDossier::new();
        d.nom = "Durand".into();
        d.nom_artiste = "Ali D".into();
        d.numero_siret = "123".into();
        d.edition_email = true;

        let p = d.to_payload();
        assert_eq!(p.get("nom"), Some("Durand"));
        assert_eq!(p.get("nomArtiste"), Some("Ali D"));
        assert_eq!(p.get("numeroSIRET"), Some("123"));
        assert_eq!(p.get("civilite"), Some("Madame"));
        assert_eq!(p.get("editionEmail"), Some("true"));
        assert_eq!(p.get("editionFacebook"), Some("false"));
        // blank text fields are not sent
        assert_eq!(p.get("ville"), None);
        assert_eq!(p.get("nomCatalogue"), None);
    }

    #[test]
    fn test_empty_title_slots_are_omitted() {
        let mut d = ArtistDossier::new();
        d.set_entry_field(0, EntryField::Titre, "Marée basse").unwrap();
        d.set_entry_field(0, EntryField::Prix, "450").unwrap();
        d.set_entry_photo(0, Some(FilePart::from_name("maree.png", vec![0u8; 4]))).unwrap();
        // technique without title: ignored
        d.set_entry_field(1, EntryField::Technique, "Huile").unwrap();
        d.set_entry_field(2, EntryField::Titre, "Ruelle").unwrap();

        let p = d.to_payload();
        assert_eq!(p.get("oeuvre1_titre"), Some("Marée basse"));
        assert_eq!(p.get("oeuvre1_prix"), Some("450"));
        // present even though blank
        assert_eq!(p.get("oeuvre1_technique"), Some(""));
        assert!(p.has_file("oeuvre1_photo"));

        assert!(!p.keys().any(|k| k.starts_with("oeuvre2_")));

        assert_eq!(p.get("oeuvre3_titre"), Some("Ruelle"));
        assert_eq!(p.get("oeuvre3_dimensions"), Some(""));
        assert!(!p.has_file("oeuvre3_photo"));
    }

    #[test]
    fn test_slot_bounds() {
        let mut d = ArtistDossier::new();
        assert_eq!(
            d.set_entry_field(DOSSIER_SLOTS, EntryField::Titre, "x"),
            Err(FormError::NoSuchSlot(DOSSIER_SLOTS))
        );

        d.oeuvres.truncate(2);
        d.normalize_slots();
        assert_eq!(d.oeuvres.len(), DOSSIER_SLOTS);
    }

    #[test]
    fn test_manifest_json_defaults() {
        let d: ArtistDossier = serde_json::from_str(
            r#"{ "nom": "Martin", "civilite": "Monsieur", "oeuvres": [{ "titre": "Néons" }] }"#,
        )
        .unwrap();
        assert_eq!(d.civilite, Civilite::Monsieur);
        assert_eq!(d.oeuvres.len(), 1);
        assert_eq!(d.to_payload().get("oeuvre1_titre"), Some("Néons"));
        assert_eq!("mademoiselle".parse::<Civilite>(), Ok(Civilite::Mademoiselle));
    }
}
