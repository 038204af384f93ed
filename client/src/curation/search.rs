//! Case-insensitive substring search over artworks and artists.
//!
//! An empty term matches everything.

use crate::models::{Artist, Artwork};

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Artwork name, artist display name, or artwork type.
pub fn artwork_matches(artwork: &Artwork, term: &str) -> bool {
    let needle = term.to_lowercase();
    contains_folded(&artwork.nom, &needle)
        || contains_folded(&artwork.artist.nom_artiste, &needle)
        || contains_folded(artwork.type_oeuvre.as_str(), &needle)
}

/// Artist display name, last name, or first name.
pub fn artist_matches(artist: &Artist, term: &str) -> bool {
    let needle = term.to_lowercase();
    contains_folded(&artist.nom_artiste, &needle)
        || contains_folded(&artist.nom, &needle)
        || contains_folded(&artist.prenom, &needle)
}

/// Matching artworks, in list order.
pub fn filter_artworks<'a>(artworks: &'a [Artwork], term: &str) -> Vec<&'a Artwork> {
    artworks.iter().filter(|a| artwork_matches(a, term)).collect()
}

/// Matching artists, in list order.
pub fn filter_artists<'a>(artists: &'a [Artist], term: &str) -> Vec<&'a Artist> {
    artists.iter().filter(|a| artist_matches(a, term)).collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Artist, ArtistType, Artwork, ArtworkType, Dimensions};

    pub fn artist(id: u32, nom: &str, prenom: &str, nom_artiste: &str) -> Artist {
        Artist {
            id,
            nom: nom.into(),
            prenom: prenom.into(),
            nom_artiste: nom_artiste.into(),
            email: format!("artist{}@example.com", id),
            telephone: None,
            adresse: None,
            type_artiste: Some(ArtistType::Painter),
        }
    }

    pub fn artwork(id: u32, nom: &str, nom_artiste: &str, kind: ArtworkType, selected: bool) -> Artwork {
        Artwork {
            id,
            nom: nom.into(),
            prix: Some(100.0),
            technique: "Huile".into(),
            photo_path: None,
            date_soumission: None,
            selectionne: selected,
            votes: 0,
            artist: artist(id + 100, "Nom", "Prénom", nom_artiste),
            type_oeuvre: kind,
            dimensions: Dimensions::Flat {
                unframed_height: None,
                unframed_width: None,
                framed_height: None,
                framed_width: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{artist, artwork};
    use super::*;
    use crate::models::ArtworkType;

    fn gallery() -> Vec<Artwork> {
        vec![
            artwork(1, "Marée basse", "Ali D", ArtworkType::Painting, false),
            artwork(2, "Torse", "Bronzino", ArtworkType::Sculpture, false),
            artwork(3, "Néons", "PIXEL", ArtworkType::Digital, false),
            artwork(4, "Ruelle", "Ali D", ArtworkType::Photo, false),
        ]
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let list = gallery();
        assert_eq!(filter_artworks(&list, "").len(), list.len());
    }

    #[test]
    fn test_matches_each_artwork_field() {
        let list = gallery();
        let ids = |term: &str| filter_artworks(&list, term).iter().map(|a| a.id).collect::<Vec<_>>();

        assert_eq!(ids("MARÉE"), vec![1]);
        assert_eq!(ids("ali"), vec![1, 4]);
        assert_eq!(ids("sculpt"), vec![2]);
        assert_eq!(ids("pixel"), vec![3]);
        assert!(ids("aquarelle").is_empty());
    }

    #[test]
    fn test_filtered_is_subset_in_order() {
        let list = gallery();
        for term in ["", "a", "o", "NU", "zz"] {
            let filtered = filter_artworks(&list, term);
            let mut last_pos = None;
            for a in filtered {
                let pos = list.iter().position(|x| x.id == a.id).unwrap();
                assert!(last_pos.map_or(true, |p| pos > p));
                last_pos = Some(pos);
                assert!(artwork_matches(a, term));
            }
        }
    }

    #[test]
    fn test_artist_search_fields() {
        let artists = vec![
            artist(1, "Durand", "Alice", "Ali D"),
            artist(2, "Martin", "Léa", "Lumen"),
            artist(3, "Petit", "Hugo", "Grand H"),
        ];
        let ids = |term: &str| filter_artists(&artists, term).iter().map(|a| a.id).collect::<Vec<_>>();

        assert_eq!(ids("durand"), vec![1]);
        assert_eq!(ids("LÉA"), vec![2]);
        assert_eq!(ids("grand"), vec![3]);
        assert_eq!(ids("").len(), 3);
    }
}
