//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **App State** - Signals shared through Leptos context
//! - **Error Types** - Frontend error handling

use std::fmt;

use cartel::{ApiError, FormError, Notification, User};
use leptos::*;
use wasm_bindgen::JsValue;

// =============================================================================
// App State
// =============================================================================

/// Signals every page can reach with `use_context::<AppState>()`.
///
/// `user` mirrors the stored session so the navigation bar reacts to
/// login and logout. `flash` carries a message across a navigation, e.g.
/// "registration done" shown on the login page.
#[derive(Clone, Copy)]
pub struct AppState {
    pub user: RwSignal<Option<User>>,
    pub flash: RwSignal<Option<Notification>>,
}

impl AppState {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: create_rw_signal(user),
            flash: create_rw_signal(None),
        }
    }

    /// Take the pending flash message, leaving none behind.
    pub fn take_flash(&self) -> Option<Notification> {
        let mut taken = None;
        self.flash.update(|f| taken = f.take());
        taken
    }
}

/// Fetch the shared state. Mounted once by `App`.
pub fn use_app_state() -> AppState {
    use_context::<AppState>().unwrap_or_else(|| AppState::new(None))
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Debug)]
pub enum AppError {
    /// HTTP call failed or was rejected.
    Api(ApiError),
    /// Local form check failed.
    Form(FormError),
    /// A browser API threw.
    Browser(String),
}

impl AppError {
    /// Text for an inline alert.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api(e) => e.user_message(fallback),
            AppError::Form(e) => e.to_string(),
            AppError::Browser(_) => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "{}", e),
            AppError::Form(e) => write!(f, "{}", e),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Form(e)
    }
}

impl From<JsValue> for AppError {
    fn from(e: JsValue) -> Self {
        AppError::Browser(format!("{:?}", e))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = AppError::from(ApiError::Validation("Email déjà utilisé".into()));
        assert_eq!(err.user_message("Erreur"), "Email déjà utilisé");

        let err = AppError::from(ApiError::Network("offline".into()));
        assert_eq!(err.user_message("Erreur"), "Erreur");

        let err = AppError::Form(FormError::PasswordMismatch);
        assert_eq!(err.user_message("Erreur"), err.to_string());

        let err = AppError::Browser("boom".into());
        assert_eq!(err.user_message("Erreur"), "Erreur");
        assert_eq!(err.to_string(), "Browser error: boom");
    }
}
