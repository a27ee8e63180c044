//! Top-level screen dispatcher.
//!
//! Holds the authenticated identity and the active screen, and threads
//! navigation intents between screens. The session itself is owned by the
//! injected [`SessionStore`]; the router only mirrors it for render
//! decisions.

use rasoi_core::{Result, SessionStore};
use std::sync::Arc;
use tracing::debug;

/// The active page of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Signup,
    Login,
    Dashboard,
    Preferences,
}

/// Transient properties handed to the next screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenProps {
    /// Preferences screen: whether it runs as an update of stored
    /// preferences rather than first-time setup.
    pub is_update: bool,
}

/// Screen and auth-state dispatcher.
pub struct SessionRouter {
    store: Arc<dyn SessionStore>,
    screen: Screen,
    props: ScreenProps,
    token: Option<String>,
    username: Option<String>,
}

impl SessionRouter {
    /// Creates the router, restoring a persisted session on startup: an
    /// authenticated store lands directly on the dashboard with the
    /// identity preloaded.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (screen, token, username) = if store.is_authenticated() {
            debug!("restoring persisted session");
            (Screen::Dashboard, store.token(), store.user())
        } else {
            (Screen::Landing, None, None)
        };

        Self {
            store,
            screen,
            props: ScreenProps::default(),
            token,
            username,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn props(&self) -> ScreenProps {
        self.props
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.username.is_some()
    }

    /// Switches the active screen.
    ///
    /// Deliberately a pure reassignment: every screen is reachable from
    /// every screen, and no transition table is enforced.
    pub fn navigate(&mut self, screen: Screen, props: ScreenProps) {
        debug!(?screen, "navigate");
        self.screen = screen;
        self.props = props;
    }

    /// Records a successful login: writes through to the store and updates
    /// the in-memory mirrors. Does not navigate; the login screen decides
    /// where to go next.
    pub fn login(&mut self, token: &str, username: &str) -> Result<()> {
        self.store.set_token(token)?;
        self.store.set_user(username)?;
        self.token = Some(token.to_string());
        self.username = Some(username.to_string());
        Ok(())
    }

    /// Ends the session: clears the store and the mirrors and forces the
    /// landing screen.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.token = None;
        self.username = None;
        self.props = ScreenProps::default();
        self.screen = Screen::Landing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasoi_core::session::MemorySessionStore;

    #[test]
    fn test_startup_without_session_lands_on_landing() {
        let router = SessionRouter::new(Arc::new(MemorySessionStore::new()));
        assert_eq!(router.screen(), Screen::Landing);
        assert!(!router.is_authenticated());
        assert!(router.username().is_none());
    }

    #[test]
    fn test_startup_restores_persisted_session() {
        let store = Arc::new(MemorySessionStore::authenticated("tok", "alice"));
        let router = SessionRouter::new(store);

        assert_eq!(router.screen(), Screen::Dashboard);
        assert!(router.is_authenticated());
        assert_eq!(router.username(), Some("alice"));
        assert_eq!(router.token(), Some("tok"));
    }

    #[test]
    fn test_login_writes_through_to_store() {
        let store = Arc::new(MemorySessionStore::new());
        let mut router = SessionRouter::new(store.clone());

        router.login("tok-9", "bob").unwrap();
        assert!(router.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-9"));
        assert_eq!(store.user().as_deref(), Some("bob"));
        // Login itself does not navigate
        assert_eq!(router.screen(), Screen::Landing);
    }

    #[test]
    fn test_logout_clears_store_and_forces_landing() {
        let store = Arc::new(MemorySessionStore::authenticated("tok", "alice"));
        let mut router = SessionRouter::new(store.clone());
        router.navigate(Screen::Preferences, ScreenProps { is_update: true });

        router.logout().unwrap();
        assert_eq!(router.screen(), Screen::Landing);
        assert!(!router.is_authenticated());
        assert!(!router.props().is_update);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_navigate_is_unrestricted_and_carries_props() {
        let mut router = SessionRouter::new(Arc::new(MemorySessionStore::new()));

        router.navigate(Screen::Preferences, ScreenProps { is_update: true });
        assert_eq!(router.screen(), Screen::Preferences);
        assert!(router.props().is_update);

        // Any screen is reachable from any screen
        router.navigate(Screen::Dashboard, ScreenProps::default());
        assert_eq!(router.screen(), Screen::Dashboard);
        assert!(!router.props().is_update);

        router.navigate(Screen::Signup, ScreenProps::default());
        assert_eq!(router.screen(), Screen::Signup);
    }
}
