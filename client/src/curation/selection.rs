//! The admin's unsaved selection of artwork ids.

use std::collections::BTreeSet;

use crate::models::Artwork;

/// Local selection candidates. Diverges from the server until saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from server state: every artwork flagged `selectionne`.
    pub fn from_artworks(artworks: &[Artwork]) -> Self {
        Self {
            ids: artworks.iter().filter(|a| a.selectionne).map(|a| a.id).collect(),
        }
    }

    /// Flip membership of `id`; returns whether it is now selected.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn set(&mut self, id: u32, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order, as sent to `/selection/finalize`.
    pub fn to_vec(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::search::fixtures::artwork;
    use crate::models::ArtworkType;

    #[test]
    fn test_double_toggle_is_identity() {
        let start: SelectionSet = [1, 5, 9].into_iter().collect();
        for id in [1, 2, 5, 100] {
            let mut s = start.clone();
            s.toggle(id);
            assert_ne!(s, start);
            s.toggle(id);
            assert_eq!(s, start);
        }
    }

    #[test]
    fn test_reconcile_from_server_flags() {
        let artworks = vec![
            artwork(1, "A", "x", ArtworkType::Painting, true),
            artwork(2, "B", "y", ArtworkType::Photo, false),
            artwork(3, "C", "z", ArtworkType::Sculpture, true),
        ];
        let s = SelectionSet::from_artworks(&artworks);
        assert_eq!(s.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut s = SelectionSet::new();
        s.set(4, true);
        s.set(4, true);
        assert_eq!(s.len(), 1);
        s.set(4, false);
        assert!(s.is_empty());
        assert!(s.toggle(4));
        assert!(s.contains(4));
    }
}
