//! Browser services.
//!
//! # Services
//!
//! - [`api`] - REST calls over gloo-net
//! - [`storage`] - Session in `localStorage`
//! - [`files`] - File input reading and PDF downloads
//! - [`viewer`] - three.js artwork viewer
//!
//! # JavaScript Bindings
//!
//! - `src/js/viewer3d.js` - three.js scene with orbit controls

pub mod api;
pub mod storage;
pub mod files;
pub mod viewer;

pub use storage::*;
pub use files::*;
pub use viewer::*;
