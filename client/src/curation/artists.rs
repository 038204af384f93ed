//! Artist listing dashboard state: search, pagination and a read-only
//! detail dialog. Nothing here mutates server data.

use crate::curation::pagination::{PageSize, Pagination};
use crate::curation::search::filter_artists;
use crate::models::Artist;

/// User actions on the artist list.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistListIntent {
    Search(String),
    SetPage(usize),
    SetPageSize(PageSize),
    Open(u32),
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct ArtistListState {
    artists: Vec<Artist>,
    search: String,
    pagination: Pagination,
    open: Option<u32>,
}

impl ArtistListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, artists: Vec<Artist>) {
        self.artists = artists;
        self.pagination.first_page();
    }

    /// Logged only; the list stays empty.
    pub fn load_failed(&mut self, error: &dyn std::fmt::Display) {
        log::error!("❌ Error fetching artists: {}", error);
        self.artists.clear();
    }

    pub fn apply(&mut self, intent: ArtistListIntent) {
        match intent {
            ArtistListIntent::Search(term) => {
                self.search = term;
                self.pagination.first_page();
            }
            ArtistListIntent::SetPage(page) => {
                let last = self.pagination.page_count(self.filtered().len()) - 1;
                self.pagination.set_page(page.min(last));
            }
            ArtistListIntent::SetPageSize(size) => self.pagination.set_size(size),
            ArtistListIntent::Open(id) => self.open = Some(id),
            ArtistListIntent::Close => self.open = None,
        }
    }

    pub fn filtered(&self) -> Vec<&Artist> {
        filter_artists(&self.artists, &self.search)
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&Artist> {
        let filtered = self.filtered();
        self.pagination.slice(&filtered).to_vec()
    }

    /// Pagination total: the filtered count.
    pub fn total(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_label(&self) -> String {
        self.pagination.label(self.total())
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Artist shown in the detail dialog.
    pub fn open_artist(&self) -> Option<&Artist> {
        let id = self.open?;
        self.artists.iter().find(|a| a.id == id)
    }
}
