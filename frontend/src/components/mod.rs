//! UI Components for the Cartel frontend.
//!
//! # Layout Components
//! - [`Navbar`] - Navigation bar with session-aware links
//! - [`Footer`] - Page footer
//! - [`RouteGate`] - Token and admin checks before a page renders
//!
//! # Pages
//! - [`HomePage`] - Landing page and published artworks
//! - [`ArtworkPage`] - Public artwork detail with voting
//! - [`LoginPage`] / [`RegisterPage`] - Account access
//! - [`DossierForm`] - Artist dossier with ten artwork slots
//! - [`ArtworkSubmissionPage`] - Single artwork submission
//! - [`AdminDashboard`] - Artwork curation, selection and catalog export
//! - [`ArtistList`] - Paginated artist listing
//!
//! # Building Blocks
//! - [`ArtworkCard`], [`ArtworkInfo`], [`ArtworkDetailsDialog`], [`Viewer3dDialog`]
//! - [`NotificationBanner`], [`InlineError`]
//! - [`TextField`], [`CheckboxField`] and their binding helpers

mod admin_dashboard;
mod artist_list;
mod artwork_card;
mod artwork_details;
mod artwork_page;
mod artwork_submission;
mod dossier_form;
mod fields;
mod footer;
mod gate;
mod home;
mod login;
mod navbar;
mod notification;
mod register;
mod viewer3d;

pub use admin_dashboard::*;
pub use artist_list::*;
pub use artwork_card::*;
pub use artwork_details::*;
pub use artwork_page::*;
pub use artwork_submission::*;
pub use dossier_form::*;
pub use fields::*;
pub use footer::*;
pub use gate::*;
pub use home::*;
pub use login::*;
pub use navbar::*;
pub use notification::*;
pub use register::*;
pub use viewer3d::*;
