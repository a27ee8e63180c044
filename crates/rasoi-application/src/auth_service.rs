//! Signup and login use cases.

use rasoi_core::auth::{Acknowledgement, AuthToken, LoginRequest, RegisterRequest};
use rasoi_core::{ApiGateway, Result};
use std::sync::Arc;
use tracing::info;

/// Thin use-case service over the auth endpoints.
///
/// Validation runs locally before the register call; the router, not this
/// service, owns writing a successful login into the session store.
pub struct AuthService {
    gateway: Arc<dyn ApiGateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Creates an account. Malformed input fails locally without a
    /// network call.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Acknowledgement> {
        request.validate()?;
        let ack = self.gateway.register(request).await?;
        info!(username = %request.username, "account registered");
        Ok(ack)
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken> {
        let token = self
            .gateway
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        info!(%username, "login succeeded");
        Ok(token)
    }
}
