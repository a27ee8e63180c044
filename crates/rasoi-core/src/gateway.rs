//! The remote-service seam.
//!
//! Every network exchange with the menu service goes through this trait.
//! The HTTP implementation lives in the interaction crate; tests inject
//! in-memory fakes.

use crate::auth::{Acknowledgement, AuthToken, LoginRequest, ProtectedData, RegisterRequest};
use crate::error::{RasoiError, Result};
use crate::menu::{MealRegenerateRequest, MenuGenerateRequest, MenuHistoryEntry, MenuResponse};
use crate::preference::PreferenceRecord;
use async_trait::async_trait;

/// Client-side contract for the remote menu service.
///
/// Implementations issue exactly one outbound request per call: no
/// batching, no retry, no caching. Failures map onto [`RasoiError`]:
/// transport problems become `Network`, non-success statuses become
/// `Remote` with the server's error detail when it sent one.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// `POST /register`
    async fn register(&self, request: &RegisterRequest) -> Result<Acknowledgement>;

    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthToken>;

    /// `GET /protected` — the identity probe.
    async fn get_protected(&self, token: &str) -> Result<ProtectedData>;

    /// `POST /preferences`
    async fn save_preferences(
        &self,
        token: &str,
        record: &PreferenceRecord,
    ) -> Result<Acknowledgement>;

    /// `GET /preferences` — rejected with 404 when none are stored yet.
    async fn get_preferences(&self, token: &str) -> Result<PreferenceRecord>;

    /// `POST /generate-menu`. `request` defaults to an empty body.
    async fn generate_menu(
        &self,
        token: &str,
        request: Option<&MenuGenerateRequest>,
    ) -> Result<MenuResponse>;

    /// `GET /current-menu` — rejected with 404 when no menu is active.
    async fn get_current_menu(&self, token: &str) -> Result<MenuResponse>;

    /// `POST /regenerate-meal` — replaces one cell of an existing menu.
    async fn regenerate_meal(
        &self,
        token: &str,
        request: &MealRegenerateRequest,
    ) -> Result<MenuResponse>;

    /// `GET /menu-history?limit=N` — server-ordered summary records.
    async fn get_menu_history(&self, token: &str, limit: usize) -> Result<Vec<MenuHistoryEntry>>;

    /// Reserved capability. Always fails with [`RasoiError::NotImplemented`];
    /// callers must treat this as permanent and never retry.
    async fn generate_grocery_list(&self, _token: &str, _menu_id: i64) -> Result<serde_json::Value> {
        Err(RasoiError::NotImplemented("grocery list generation"))
    }

    /// Reserved capability. Always fails with [`RasoiError::NotImplemented`];
    /// callers must treat this as permanent and never retry.
    async fn get_recipe_videos(&self, _token: &str, _dish: &str) -> Result<serde_json::Value> {
        Err(RasoiError::NotImplemented("recipe video search"))
    }
}
