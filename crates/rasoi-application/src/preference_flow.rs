//! Preference wizard orchestration.
//!
//! Drives the wizard's two remote touchpoints: hydrating an update flow
//! from stored preferences, and submitting the finished selection. The
//! state machine itself lives in the core crate.

use crate::router::Screen;
use rasoi_core::preference::{PreferenceSelection, PreferenceWizard};
use rasoi_core::{ApiGateway, RasoiError, Result, SessionStore};
use std::sync::Arc;
use tracing::debug;

/// How the wizard's initial selection was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// First-time setup, or no token available: nothing was fetched.
    NotRequested,
    /// Stored preferences were fetched and reverse-mapped.
    Hydrated,
    /// The fetch failed and was absorbed; the selection stays at its
    /// empty default. This is a deliberate soft-fail, not an oversight.
    SoftFailed,
}

/// Use case service around [`PreferenceWizard`].
pub struct PreferenceFlow {
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
}

impl PreferenceFlow {
    pub fn new(gateway: Arc<dyn ApiGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Starts a wizard session.
    ///
    /// In the update flow, stored preferences are fetched and hydrated
    /// when a token exists; any fetch failure is swallowed into the empty
    /// default selection.
    pub async fn start(&self, is_update: bool) -> (PreferenceWizard, HydrationOutcome) {
        if !is_update {
            return (PreferenceWizard::new(), HydrationOutcome::NotRequested);
        }
        let Some(token) = self.store.token() else {
            return (PreferenceWizard::new(), HydrationOutcome::NotRequested);
        };

        match self.gateway.get_preferences(&token).await {
            Ok(record) => (
                PreferenceWizard::with_selection(PreferenceSelection::from_record(&record)),
                HydrationOutcome::Hydrated,
            ),
            Err(err) => {
                debug!("preference hydration skipped: {}", err);
                (PreferenceWizard::new(), HydrationOutcome::SoftFailed)
            }
        }
    }

    /// Submits the wizard's selection.
    ///
    /// A missing token is a local precondition failure; no request is
    /// issued. On success the caller navigates to the returned screen; on
    /// failure the wizard stays on its final step so the user can retry.
    pub async fn finish(&self, wizard: &PreferenceWizard) -> Result<Screen> {
        let token = self.store.token().ok_or(RasoiError::MissingCredential)?;
        self.gateway
            .save_preferences(&token, &wizard.finish())
            .await?;
        Ok(Screen::Dashboard)
    }
}
