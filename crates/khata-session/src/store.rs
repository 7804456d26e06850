//! # Session Store
//!
//! Persistence of the signed-in session across app launches.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                                  │
//! │                                                                         │
//! │  App launch ──► store.load() ──► Some(session): straight to home       │
//! │                              └─► None:          login screen           │
//! │                                                                         │
//! │  Login OK   ──► store.save(&session)                                   │
//! │  Refresh OK ──► store.save(&renewed)                                   │
//! │  Logout     ──► store.clear()                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `FileStore` is the shipped implementation: one JSON document in the
//! app's data directory. Hosts with a platform keystore implement
//! [`SessionStore`] themselves and hand that to the api client instead.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::session::Session;

/// File name of the persisted session inside the data directory.
const SESSION_FILE: &str = "session.json";

// =============================================================================
// Store Trait
// =============================================================================

/// Persistence seam for the signed-in session.
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session, if a usable one exists.
    ///
    /// A missing or unreadable-as-JSON session yields `Ok(None)`; the
    /// recovery path for a broken session file is signing in again, not
    /// an error dialog.
    fn load(&self) -> SessionResult<Option<Session>>;

    /// Persists the session, replacing any previous one.
    fn save(&self, session: &Session) -> SessionResult<()>;

    /// Removes the persisted session.
    fn clear(&self) -> SessionResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed [`SessionStore`]: one JSON document on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store persisting at the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Creates a store persisting `session.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        FileStore {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> SessionResult<Option<Session>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted session");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&text) {
            Ok(session) => {
                debug!(path = %self.path.display(), "session restored");
                Ok(Some(session))
            }
            Err(err) => {
                // Corrupt file: treat as signed-out rather than failing launch
                warn!(path = %self.path.display(), error = %err, "discarding unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-save can't leave a torn file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), user = %session.user.user_name, "session saved");
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory [`SessionStore`] with no persistence.
///
/// Used by tests and by hosts that deliberately forget the session on
/// exit (shared terminals).
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> SessionResult<Option<Session>> {
        Ok(self.session.lock().expect("Session mutex poisoned").clone())
    }

    fn save(&self, session: &Session) -> SessionResult<()> {
        *self.session.lock().expect("Session mutex poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.session.lock().expect("Session mutex poisoned") = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
