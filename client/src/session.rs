//! Session persistence.
//!
//! A session is a token plus the user JSON blob, kept under two fixed keys
//! ([`TOKEN_KEY`], [`USER_KEY`]) in a key/value [`StorageBackend`]. The
//! browser plugs in `localStorage`; natively a JSON file is used.
//!
//! [`SessionStore`] is the only thing that reads or writes those keys. It is
//! handed to the API client and to the route guard instead of being a
//! process-wide global.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{SessionError, SessionResult};
use crate::models::{Session, User};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key of the serialized [`User`].
pub const USER_KEY: &str = "user";

/// Minimal key/value storage, shaped like the browser's `localStorage`.
pub trait StorageBackend {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &str) -> SessionResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Typed access to the session keys of a backend.
#[derive(Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored token, if any. Empty strings count as absent.
    pub fn token(&self) -> SessionResult<Option<String>> {
        Ok(self.backend.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Stored user profile, if any.
    pub fn user(&self) -> SessionResult<Option<User>> {
        match self.backend.get(USER_KEY)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Token and user together; `None` unless both are present.
    pub fn current(&self) -> SessionResult<Option<Session>> {
        let token = match self.token()? {
            Some(t) => t,
            None => return Ok(None),
        };
        Ok(self.user()?.map(|user| Session { token, user }))
    }

    /// Whether a token is stored. Storage failures read as "no token".
    pub fn has_token(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                log::warn!("⚠️ Could not read session token: {}", e);
                false
            }
        }
    }

    /// Persist a freshly issued session.
    pub fn save(&self, session: &Session) -> SessionResult<()> {
        let user = serde_json::to_string(&session.user)?;
        self.backend.set(TOKEN_KEY, &session.token)?;
        self.backend.set(USER_KEY, &user)?;
        Ok(())
    }

    /// Forget token and user (logout, or a 401 from the server).
    pub fn clear(&self) -> SessionResult<()> {
        self.backend.remove(TOKEN_KEY)?;
        self.backend.remove(USER_KEY)?;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend, for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage("memory store poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// JSON-file backend: one object holding every key.
///
/// Each operation re-reads the file, so separate processes see each other's
/// writes (last write wins, no locking).
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SessionResult<HashMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;

        // Holds a bearer token: owner read/write only.
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
