//! Dashboard data aggregation.
//!
//! Reconciles four independent, independently-failing data sources into
//! one view model: the identity probe, stored preferences, the current
//! menu, and the menu history. A failure in one never aborts the others;
//! the one exception is a 401 on the identity probe, which marks the whole
//! session as no longer valid.

use rasoi_core::auth::ProtectedData;
use rasoi_core::config::DEFAULT_HISTORY_LIMIT;
use rasoi_core::menu::{MealRegenerateRequest, MenuHistoryEntry, MenuResponse};
use rasoi_core::preference::PreferenceRecord;
use rasoi_core::{ApiGateway, RasoiError, Result, SessionStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the dashboard renders, each slice defaulting to absent when
/// its fetch failed.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub identity: Option<ProtectedData>,
    pub preferences: Option<PreferenceRecord>,
    pub has_preferences: bool,
    pub current_menu: Option<MenuResponse>,
    pub menu_history: Vec<MenuHistoryEntry>,
    /// Set when the identity probe was rejected with 401; the caller must
    /// force a logout.
    pub session_expired: bool,
}

impl DashboardView {
    /// One-line preference summary for the header, e.g.
    /// `veg • north-indian, chinese...`.
    pub fn preference_summary(&self) -> String {
        let Some(prefs) = &self.preferences else {
            return "Not set".to_string();
        };

        let diet = if prefs.diet_type.is_empty() {
            "Mixed"
        } else {
            &prefs.diet_type
        };
        let cuisines = if prefs.cuisine.is_empty() {
            "Various cuisines".to_string()
        } else {
            let shown = prefs.cuisine.len().min(2);
            let mut joined = prefs.cuisine[..shown].join(", ");
            if prefs.cuisine.len() > 2 {
                joined.push_str("...");
            }
            joined
        };

        format!("{} • {}", diet, cuisines)
    }
}

/// Outcome of a menu-generation action.
#[derive(Debug, Clone)]
pub enum GenerateOutcome {
    /// A new menu is active; the history was refreshed after generation.
    Generated {
        menu: MenuResponse,
        history: Vec<MenuHistoryEntry>,
    },
    /// Refused: preferences must exist first. The caller redirects the
    /// user to preference setup instead of calling the service.
    NeedsPreferences,
    /// Refused: regeneration needs an active menu to replace.
    NoActiveMenu,
}

/// Fetches and reconciles the dashboard's data sources.
pub struct DashboardAggregator {
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    history_limit: usize,
}

impl DashboardAggregator {
    pub fn new(gateway: Arc<dyn ApiGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Overrides how many history entries are requested.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Loads the full dashboard view.
    ///
    /// Without a token no fetch is issued and the logged-out-equivalent
    /// empty view is returned without error. With one, the four sources
    /// are fetched in turn and each failure is absorbed into its default,
    /// except a 401 on the identity probe which short-circuits with
    /// `session_expired` set.
    pub async fn refresh(&self) -> DashboardView {
        let mut view = DashboardView::default();
        let Some(token) = self.store.token() else {
            return view;
        };

        match self.gateway.get_protected(&token).await {
            Ok(identity) => view.identity = Some(identity),
            Err(err) if err.is_unauthorized() => {
                warn!("identity probe rejected, treating session as expired: {}", err);
                view.session_expired = true;
                return view;
            }
            Err(err) => debug!("protected endpoint unavailable: {}", err),
        }

        match self.gateway.get_preferences(&token).await {
            Ok(preferences) => {
                view.has_preferences = true;
                view.preferences = Some(preferences);
            }
            Err(err) => debug!("no stored preferences: {}", err),
        }

        match self.gateway.get_current_menu(&token).await {
            Ok(menu) => view.current_menu = Some(menu),
            Err(err) => debug!("no current menu: {}", err),
        }

        match self.gateway.get_menu_history(&token, self.history_limit).await {
            Ok(history) => view.menu_history = history,
            Err(err) => warn!("failed to fetch menu history: {}", err),
        }

        view
    }

    /// Generates a fresh weekly menu, then refreshes the history.
    ///
    /// Refused with [`GenerateOutcome::NeedsPreferences`] when the view
    /// shows no stored preferences; the service would reject the call
    /// anyway and the user belongs in preference setup.
    pub async fn generate_menu(&self, view: &DashboardView) -> Result<GenerateOutcome> {
        if !view.has_preferences {
            return Ok(GenerateOutcome::NeedsPreferences);
        }
        let token = self.token()?;

        let menu = self.gateway.generate_menu(&token, None).await?;

        // Sequenced after generation; a history failure does not undo the
        // menu that was just generated
        let history = match self.gateway.get_menu_history(&token, self.history_limit).await {
            Ok(history) => history,
            Err(err) => {
                warn!("history refresh after generation failed: {}", err);
                Vec::new()
            }
        };

        Ok(GenerateOutcome::Generated { menu, history })
    }

    /// Regenerates the whole menu. Additionally requires an active menu.
    pub async fn regenerate_menu(&self, view: &DashboardView) -> Result<GenerateOutcome> {
        if view.current_menu.is_none() {
            return Ok(GenerateOutcome::NoActiveMenu);
        }
        self.generate_menu(view).await
    }

    /// Replaces one (day, meal) cell of an existing menu.
    pub async fn regenerate_meal(
        &self,
        menu_id: i64,
        day: &str,
        meal: &str,
    ) -> Result<MenuResponse> {
        let token = self.token()?;
        self.gateway
            .regenerate_meal(
                &token,
                &MealRegenerateRequest {
                    menu_id,
                    day: day.to_string(),
                    meal: meal.to_string(),
                },
            )
            .await
    }

    fn token(&self) -> Result<String> {
        self.store.token().ok_or(RasoiError::MissingCredential)
    }
}
