//! Error types for the Cartel client.
//!
//! Errors are grouped by concern:
//!
//! - [`ApiError`] - HTTP transport and server responses
//! - [`SessionError`] - Session store I/O and encoding
//! - [`FormError`] - Local form checks performed before any request
//! - [`ConfigError`] - Environment configuration
//! - [`CliError`] - Anything the command-line tool reports
//!
//! Conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// Errors returned by API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Login refused by the server.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The server answered 401. The session has already been cleared.
    #[error("Session expired or missing, please log in again")]
    Unauthorized {
        /// Route the user must be sent to.
        redirect: &'static str,
    },

    /// The server rejected the payload.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Session store failure while attaching or clearing the token.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Message suitable for an inline alert, falling back to `fallback`
    /// for errors that carry nothing useful for the user.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::InvalidCredentials(msg)
                if !msg.is_empty() =>
            {
                msg.clone()
            }
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the caller must leave the current page for the login route.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors from a session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Backing storage could not be read or written.
    #[error("Session storage unavailable: {0}")]
    Storage(String),

    /// IO error on the session file.
    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored user blob is not valid JSON.
    #[error("Session JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Form Errors
// =============================================================================

/// Errors raised by local form checks. None of them reach the network.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    /// Password and confirmation differ.
    #[error("Les mots de passe ne correspondent pas")]
    PasswordMismatch,

    /// One or more required fields are empty.
    #[error("Veuillez remplir tous les champs obligatoires")]
    MissingRequired(Vec<&'static str>),

    /// A value does not belong to a fixed enumeration.
    #[error("Valeur invalide pour '{field}': {value}")]
    InvalidChoice { field: &'static str, value: String },

    /// Slot index outside the fixed number of dossier entries.
    #[error("Œuvre N°{0} inexistante")]
    NoSuchSlot(usize),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("Invalid value for {name}: {message}")]
    InvalidVar { name: &'static str, message: String },
}

// =============================================================================
// CLI Errors
// =============================================================================

/// Top-level error of the `cartel` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line input.
    #[error("{0}")]
    Usage(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type for local form checks.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let session_err: SessionError = io.into();
        let api_err: ApiError = session_err.into();
        assert!(api_err.to_string().contains("denied"));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Validation("Email déjà utilisé".into());
        assert_eq!(err.user_message("Erreur lors de l'inscription"), "Email déjà utilisé");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            err.user_message("Erreur lors de l'inscription"),
            "Erreur lors de l'inscription"
        );

        let err = ApiError::Validation(String::new());
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Les mots de passe ne correspondent pas"
        );
        assert_eq!(
            FormError::MissingRequired(vec!["nom"]).to_string(),
            "Veuillez remplir tous les champs obligatoires"
        );
    }
}
