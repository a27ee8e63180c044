//! HTTP implementation of the remote-service gateway.
//!
//! One generic request path for every endpoint: build the URL from the
//! configured origin, JSON-encode the body, attach the bearer header when a
//! token is supplied, send, and interpret the response status. Non-success
//! statuses surface the server's `detail` field when the error body carries
//! one.

use async_trait::async_trait;
use rasoi_core::auth::{Acknowledgement, AuthToken, LoginRequest, ProtectedData, RegisterRequest};
use rasoi_core::config::ApiConfig;
use rasoi_core::gateway::ApiGateway;
use rasoi_core::menu::{
    MealRegenerateRequest, MenuGenerateRequest, MenuHistoryEntry, MenuHistoryResponse, MenuResponse,
};
use rasoi_core::preference::PreferenceRecord;
use rasoi_core::{RasoiError, Result};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

/// Structured error body the service sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Gateway to the remote menu service over HTTP.
///
/// Holds a single [`reqwest::Client`] so connections are reused across
/// calls. Cloning shares the client.
#[derive(Debug, Clone)]
pub struct HttpApiGateway {
    client: Client,
    base_url: String,
}

impl HttpApiGateway {
    /// Creates a gateway against the given origin (trailing slash ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a gateway from the loaded client configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The single chokepoint every endpoint goes through.
    ///
    /// # Errors
    ///
    /// - [`RasoiError::Network`] when the transport fails before a response
    /// - [`RasoiError::Remote`] for any non-success status; the message is
    ///   the body's `detail` field when present, else a generic HTTP status
    ///   message
    /// - [`RasoiError::Serialization`] when a success body fails to parse
    async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "API request");

        let mut request = self.client.request(method, &url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RasoiError::network(format!("API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody { detail: Some(detail) }) => detail,
                _ => format!("HTTP error! status: {}", status.as_u16()),
            };
            debug!(status = status.as_u16(), %message, "API request rejected");
            return Err(RasoiError::remote(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| RasoiError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse response: {}", e),
        })
    }
}

#[async_trait]
impl ApiGateway for HttpApiGateway {
    async fn register(&self, request: &RegisterRequest) -> Result<Acknowledgement> {
        self.request(Method::POST, "/register", None, Some(request))
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthToken> {
        self.request(Method::POST, "/login", None, Some(request))
            .await
    }

    async fn get_protected(&self, token: &str) -> Result<ProtectedData> {
        self.request::<_, ()>(Method::GET, "/protected", Some(token), None)
            .await
    }

    async fn save_preferences(
        &self,
        token: &str,
        record: &PreferenceRecord,
    ) -> Result<Acknowledgement> {
        self.request(Method::POST, "/preferences", Some(token), Some(record))
            .await
    }

    async fn get_preferences(&self, token: &str) -> Result<PreferenceRecord> {
        self.request::<_, ()>(Method::GET, "/preferences", Some(token), None)
            .await
    }

    async fn generate_menu(
        &self,
        token: &str,
        request: Option<&MenuGenerateRequest>,
    ) -> Result<MenuResponse> {
        // The service expects a body even for a plain generation
        let body = request.cloned().unwrap_or_default();
        self.request(Method::POST, "/generate-menu", Some(token), Some(&body))
            .await
    }

    async fn get_current_menu(&self, token: &str) -> Result<MenuResponse> {
        self.request::<_, ()>(Method::GET, "/current-menu", Some(token), None)
            .await
    }

    async fn regenerate_meal(
        &self,
        token: &str,
        request: &MealRegenerateRequest,
    ) -> Result<MenuResponse> {
        self.request(Method::POST, "/regenerate-meal", Some(token), Some(request))
            .await
    }

    async fn get_menu_history(&self, token: &str, limit: usize) -> Result<Vec<MenuHistoryEntry>> {
        let response: MenuHistoryResponse = self
            .request::<_, ()>(
                Method::GET,
                &format!("/menu-history?limit={}", limit),
                Some(token),
                None,
            )
            .await?;
        Ok(response.menus)
    }
}
