//! File-backed session store.
//!
//! Persists the (`token`, `username`) pair to `session.json` so the session
//! survives restarts. Every mutator writes through; reads come from an
//! in-memory mirror loaded once at construction.

use crate::paths::RasoiPaths;
use crate::storage::AtomicJsonFile;
use rasoi_core::Result;
use rasoi_core::session::{Session, SessionStore};
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

/// Durable [`SessionStore`] over an atomically-written JSON file.
pub struct FileSessionStore {
    file: AtomicJsonFile<Session>,
    session: RwLock<Session>,
}

impl FileSessionStore {
    /// Opens (or prepares to create) the store at `path`, loading any
    /// existing session into memory.
    pub fn new(path: PathBuf) -> Result<Self> {
        let file = AtomicJsonFile::new(path);
        let session: Session = file.load()?.unwrap_or_default();
        debug!(authenticated = session.is_authenticated(), "session store opened");
        Ok(Self {
            file,
            session: RwLock::new(session),
        })
    }

    /// Opens the store at the platform-default location
    /// (`~/.config/rasoi/session.json`).
    pub fn at_default_location() -> Result<Self> {
        Self::new(RasoiPaths::session_file()?)
    }

    /// Saves the current session and tightens file permissions; the file
    /// holds a credential.
    fn persist(&self, session: &Session) -> Result<()> {
        self.file.save(session)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(self.file.path(), permissions)?;
        }

        Ok(())
    }

    fn mutate<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Session),
    {
        let mut session = self.session.write().unwrap();
        f(&mut session);
        self.persist(&session)
    }
}

impl SessionStore for FileSessionStore {
    fn set_token(&self, token: &str) -> Result<()> {
        self.mutate(|session| session.token = Some(token.to_string()))
    }

    fn token(&self) -> Option<String> {
        self.session.read().unwrap().token.clone()
    }

    fn set_user(&self, username: &str) -> Result<()> {
        self.mutate(|session| session.username = Some(username.to_string()))
    }

    fn user(&self) -> Option<String> {
        self.session.read().unwrap().username.clone()
    }

    fn clear(&self) -> Result<()> {
        self.mutate(Session::clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("session.json")).unwrap()
    }

    #[test]
    fn test_write_through_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = store_in(&temp_dir);
            store.set_token("tok-123").unwrap();
            store.set_user("alice").unwrap();
            assert!(store.is_authenticated());
        }

        // A fresh store over the same file sees the persisted session
        let reopened = store_in(&temp_dir);
        assert_eq!(reopened.token().as_deref(), Some("tok-123"));
        assert_eq!(reopened.user().as_deref(), Some("alice"));
        assert!(reopened.is_authenticated());
    }

    #[test]
    fn test_clear_is_idempotent_even_when_unauthenticated() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        // Clearing a store that never held a session still succeeds
        store.clear().unwrap();
        assert!(!store.is_authenticated());

        store.set_token("tok").unwrap();
        store.set_user("bob").unwrap();
        store.clear().unwrap();
        assert!(!store.is_authenticated());

        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_token_alone_is_not_authenticated() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.set_token("tok").unwrap();
        assert!(!store.is_authenticated());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.set_token("tok").unwrap();

        let mode = std::fs::metadata(temp_dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
