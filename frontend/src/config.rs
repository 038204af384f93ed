//! Application configuration.
//!
//! Compiled-in constants for the Cartel frontend. The API is served from
//! the same origin as the static bundle (trunk proxies `/api` in dev).

/// API base URL, relative to the page origin.
pub const API_BASE: &str = "/api";

/// Shown in the navigation bar and the document title.
pub const APP_NAME: &str = "Exposition d'Art";

/// Dashboard notifications hide themselves after this delay.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 6_000;

/// 3D viewer canvas size, in pixels.
pub const VIEWER_WIDTH: u32 = 800;
pub const VIEWER_HEIGHT: u32 = 600;

/// Accepted image types for artwork photos.
pub const PHOTO_ACCEPT: &str = "image/*";
