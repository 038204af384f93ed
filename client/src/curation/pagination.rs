//! Client-side pagination. The server never pages.

use std::ops::Range;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    pub fn from_usize(n: usize) -> Option<Self> {
        match n {
            5 => Some(PageSize::Five),
            10 => Some(PageSize::Ten),
            25 => Some(PageSize::TwentyFive),
            _ => None,
        }
    }
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page: usize,
    size: PageSize,
}

impl Pagination {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self { page, size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the size always goes back to the first page.
    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 0;
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// `[page*size, page*size+size)` clamped to `total`.
    pub fn range(&self, total: usize) -> Range<usize> {
        let size = self.size.get();
        let start = self.page.saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Number of pages for `total` items; at least one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size.get()).max(1)
    }

    /// Range label such as "11–20 sur 42".
    pub fn label(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            format!("0–0 sur {}", total)
        } else {
            format!("{}–{} sur {}", range.start + 1, range.end, total)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_matches_js_slice_semantics() {
        let items: Vec<u32> = (0..23).collect();
        for size in PageSize::ALL {
            for page in 0..8 {
                let p = Pagination::new(page, size);
                let n = size.get();
                let start = (page * n).min(items.len());
                let end = (page * n + n).min(items.len());
                assert_eq!(p.slice(&items), &items[start..end]);
            }
        }
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(3, PageSize::Five);
        p.set_size(PageSize::TwentyFive);
        assert_eq!(p.page(), 0);
        assert_eq!(p.size().get(), 25);
    }

    #[test]
    fn test_counts_and_labels() {
        let p = Pagination::new(1, PageSize::Ten);
        assert_eq!(p.page_count(42), 5);
        assert_eq!(p.page_count(0), 1);
        assert_eq!(p.label(42), "11–20 sur 42");
        assert_eq!(Pagination::default().label(0), "0–0 sur 0");
        assert!(p.has_previous());
        assert!(p.has_next(42));
        assert!(!Pagination::new(4, PageSize::Ten).has_next(42));
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(PageSize::from_usize(25), Some(PageSize::TwentyFive));
        assert_eq!(PageSize::from_usize(7), None);
        assert_eq!(PageSize::default().get(), 10);
    }
}
