//! Session domain model and the store seam.
//!
//! The session is the pair of persisted values (`token`, `username`) that
//! decides whether a user is authenticated. It is owned by a [`SessionStore`]
//! implementation and mirrored (not owned) by the router for render
//! decisions.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// The persisted session state.
///
/// Invariant: the user is authenticated iff both fields are present. There
/// is no local expiry; a stale token is only discovered when a subsequent
/// API call is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential issued at login
    pub token: Option<String>,
    /// Username the token was issued for
    pub username: Option<String>,
}

impl Session {
    /// Returns true iff both token and username are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.username.is_some()
    }

    /// Clears both fields. Idempotent.
    pub fn clear(&mut self) {
        self.token = None;
        self.username = None;
    }
}

/// An abstract store for the session credential pair.
///
/// This trait decouples the components that read auth state (router,
/// dashboard, preference flow) from the storage mechanism. Implementations
/// write through to durable storage so state survives restarts.
pub trait SessionStore: Send + Sync {
    /// Stores the bearer token.
    fn set_token(&self, token: &str) -> Result<()>;

    /// Returns the stored bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Stores the username.
    fn set_user(&self, username: &str) -> Result<()>;

    /// Returns the stored username, if any.
    fn user(&self) -> Option<String>;

    /// Clears both token and username. Idempotent: clearing an already
    /// empty store succeeds and leaves it empty.
    fn clear(&self) -> Result<()>;

    /// Returns true iff both token and username are present.
    fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }
}

/// In-memory store with no durability.
///
/// Suitable for tests and for flows that must not touch the filesystem.
/// Production code uses the file-backed implementation from the
/// infrastructure crate.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that is already authenticated, for test setups.
    pub fn authenticated(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            session: RwLock::new(Session {
                token: Some(token.into()),
                username: Some(username.into()),
            }),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn set_token(&self, token: &str) -> Result<()> {
        self.session.write().unwrap().token = Some(token.to_string());
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.session.read().unwrap().token.clone()
    }

    fn set_user(&self, username: &str) -> Result<()> {
        self.session.write().unwrap().username = Some(username.to_string());
        Ok(())
    }

    fn user(&self) -> Option<String> {
        self.session.read().unwrap().username.clone()
    }

    fn clear(&self) -> Result<()> {
        self.session.write().unwrap().clear();
        Ok(())
    }
}
