//! Artwork curation dashboard state.
//!
//! The view only emits [`CurationIntent`]s. [`CurationState`] owns every
//! mutation, including the outcome of the async operations (load, save,
//! catalog export) which the caller performs and then reports back.

use crate::curation::search::filter_artworks;
use crate::curation::selection::SelectionSet;
use crate::models::Artwork;

pub const MSG_LOAD_FAILED: &str = "Erreur lors du chargement des œuvres";
pub const MSG_SELECTION_SAVED: &str = "Sélection enregistrée avec succès";
pub const MSG_SELECTION_FAILED: &str = "Erreur lors de l'enregistrement de la sélection";
pub const MSG_CATALOG_READY: &str = "Catalogue PDF généré avec succès";
pub const MSG_CATALOG_FAILED: &str = "Erreur lors de la génération du PDF";

/// Download name of the exported catalog.
pub const CATALOG_FILE_NAME: &str = "catalogue_oeuvres.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Selected,
}

/// Which overlay is open. Only one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Viewer3d(u32),
    Details(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient message shown over the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// User actions on the curation dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum CurationIntent {
    Search(String),
    SwitchTab(Tab),
    Toggle(u32),
    SetSelected(u32, bool),
    View3d(u32),
    ViewDetails(u32),
    CloseModal,
    DismissNotification,
}

#[derive(Debug, Clone, Default)]
pub struct CurationState {
    artworks: Vec<Artwork>,
    search: String,
    selection: SelectionSet,
    tab: Tab,
    modal: Modal,
    notification: Option<Notification>,
    /// Bumped on every raised notification, even when the message repeats.
    notification_seq: u64,
    load_state: LoadState,
}

impl CurationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh server copy and rebuild the selection
    /// from `selectionne` flags. Local unsaved toggles are discarded.
    pub fn load(&mut self, artworks: Vec<Artwork>) {
        self.selection = SelectionSet::from_artworks(&artworks);
        self.artworks = artworks;
        self.load_state = LoadState::Ready;
        log::debug!("🖼️ Loaded {} artworks, {} selected", self.artworks.len(), self.selection.len());
    }

    /// A failed load keeps whatever was already shown.
    pub fn load_failed(&mut self) {
        if self.artworks.is_empty() {
            self.load_state = LoadState::Failed;
        }
        self.notify(Notification::error(MSG_LOAD_FAILED));
    }

    pub fn apply(&mut self, intent: CurationIntent) {
        match intent {
            CurationIntent::Search(term) => self.search = term,
            CurationIntent::SwitchTab(tab) => self.tab = tab,
            CurationIntent::Toggle(id) => {
                self.selection.toggle(id);
            }
            CurationIntent::SetSelected(id, selected) => self.selection.set(id, selected),
            CurationIntent::View3d(id) => self.modal = Modal::Viewer3d(id),
            CurationIntent::ViewDetails(id) => self.modal = Modal::Details(id),
            CurationIntent::CloseModal => self.modal = Modal::Closed,
            CurationIntent::DismissNotification => self.notification = None,
        }
    }

    /// Artworks to display: search first, then the tab filter.
    pub fn visible(&self) -> Vec<&Artwork> {
        let mut list = filter_artworks(&self.artworks, &self.search);
        if self.tab == Tab::Selected {
            list.retain(|a| self.selection.contains(a.id));
        }
        list
    }

    /// Payload for `/selection/finalize`.
    pub fn selection_ids(&self) -> Vec<u32> {
        self.selection.to_vec()
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selection.contains(id)
    }

    pub fn can_save(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn can_export(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The caller reloads the list after this.
    pub fn selection_saved(&mut self) {
        self.notify(Notification::success(MSG_SELECTION_SAVED));
    }

    /// The local selection is left untouched.
    pub fn selection_save_failed(&mut self) {
        self.notify(Notification::error(MSG_SELECTION_FAILED));
    }

    pub fn catalog_ready(&mut self) {
        self.notify(Notification::success(MSG_CATALOG_READY));
    }

    pub fn catalog_failed(&mut self) {
        self.notify(Notification::error(MSG_CATALOG_FAILED));
    }

    pub fn selected_tab_label(&self) -> String {
        format!("Œuvres sélectionnées ({})", self.selection.len())
    }

    pub fn all_tab_label(&self) -> String {
        format!("Toutes les œuvres ({})", self.artworks.len())
    }

    /// Artwork shown by the open modal, if it still exists.
    pub fn modal_artwork(&self) -> Option<&Artwork> {
        let id = match self.modal {
            Modal::Closed => return None,
            Modal::Viewer3d(id) | Modal::Details(id) => id,
        };
        self.artworks.iter().find(|a| a.id == id)
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Changes whenever a notification is raised. Auto-hide timers compare
    /// against it so a repeated message restarts the countdown.
    pub fn notification_seq(&self) -> u64 {
        self.notification_seq
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.notification_seq += 1;
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::search::fixtures::artwork;
    use crate::models::ArtworkType;

    fn two_artworks() -> Vec<Artwork> {
        vec![
            artwork(1, "Marée basse", "Ali D", ArtworkType::Painting, true),
            artwork(2, "Torse", "Bronzino", ArtworkType::Sculpture, false),
        ]
    }

    fn ids(list: Vec<&Artwork>) -> Vec<u32> {
        list.into_iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_load_reconciles_selection() {
        let mut state = CurationState::new();
        state.load(two_artworks());

        assert_eq!(state.selection_ids(), vec![1]);
        state.apply(CurationIntent::SwitchTab(Tab::Selected));
        assert_eq!(ids(state.visible()), vec![1]);
        assert_eq!(state.selected_tab_label(), "Œuvres sélectionnées (1)");
    }

    #[test]
    fn test_search_applies_before_tab() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        state.apply(CurationIntent::Toggle(2));
        state.apply(CurationIntent::Search("sculpture".into()));
        assert_eq!(ids(state.visible()), vec![2]);

        state.apply(CurationIntent::Toggle(2));
        state.apply(CurationIntent::SwitchTab(Tab::Selected));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_reload_discards_local_toggles() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        state.apply(CurationIntent::SetSelected(2, true));
        state.apply(CurationIntent::SetSelected(1, false));
        assert_eq!(state.selection_ids(), vec![2]);

        state.load(two_artworks());
        assert_eq!(state.selection_ids(), vec![1]);
    }

    #[test]
    fn test_save_failure_keeps_selection() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        state.apply(CurationIntent::Toggle(2));
        state.selection_save_failed();

        assert_eq!(state.selection_ids(), vec![1, 2]);
        let note = state.notification().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, MSG_SELECTION_FAILED);

        state.apply(CurationIntent::DismissNotification);
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_repeated_notification_bumps_seq() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        assert_eq!(state.notification_seq(), 0);

        state.selection_saved();
        let first = state.notification_seq();
        state.selection_saved();
        assert!(state.notification_seq() > first);
        assert_eq!(state.notification().unwrap().message, MSG_SELECTION_SAVED);

        let before = state.notification_seq();
        state.apply(CurationIntent::DismissNotification);
        assert_eq!(state.notification_seq(), before);
    }

    #[test]
    fn test_actions_disabled_with_empty_selection() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        assert!(state.can_save() && state.can_export());

        state.apply(CurationIntent::Toggle(1));
        assert!(!state.can_save());
        assert!(!state.can_export());
    }

    #[test]
    fn test_load_failure_states() {
        let mut state = CurationState::new();
        assert_eq!(state.load_state(), LoadState::Loading);
        state.load_failed();
        assert_eq!(state.load_state(), LoadState::Failed);
        assert_eq!(state.notification().unwrap().message, MSG_LOAD_FAILED);

        let mut state = CurationState::new();
        state.load(two_artworks());
        state.load_failed();
        assert_eq!(state.load_state(), LoadState::Ready);
        assert_eq!(state.artworks().len(), 2);
    }

    #[test]
    fn test_modals() {
        let mut state = CurationState::new();
        state.load(two_artworks());
        state.apply(CurationIntent::View3d(2));
        assert_eq!(state.modal_artwork().map(|a| a.id), Some(2));
        state.apply(CurationIntent::ViewDetails(1));
        assert_eq!(state.modal(), Modal::Details(1));
        state.apply(CurationIntent::CloseModal);
        assert!(state.modal_artwork().is_none());
    }
}
