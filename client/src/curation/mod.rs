//! Admin-side curation.
//!
//! Pure state for the two admin dashboards. Network calls are made by the
//! caller; results are fed back into the state.

mod artists;
mod dashboard;
mod pagination;
pub(crate) mod search;
mod selection;

pub use artists::*;
pub use dashboard::*;
pub use pagination::*;
pub use search::{artist_matches, artwork_matches, filter_artists, filter_artworks};
pub use selection::*;
