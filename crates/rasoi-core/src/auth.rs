//! Auth wire types and local signup validation.
//!
//! Validation runs before any network call so obviously malformed input
//! never leaves the client.

use crate::error::{RasoiError, Result};
use serde::{Deserialize, Serialize};

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum username length accepted at signup.
pub const MIN_USERNAME_LEN: usize = 3;

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Checks all three fields locally, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_username(&self.username) {
            return Err(RasoiError::validation(format!(
                "Username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if !is_valid_email(&self.email) {
            return Err(RasoiError::validation("Invalid email address"));
        }
        if !is_valid_password(&self.password) {
            return Err(RasoiError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Response of `GET /protected`, the identity probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedData {
    pub message: String,
    pub user: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Generic `{"msg": ...}` confirmation body returned by write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub msg: String,
}

/// Shape check only: one `@`, non-empty local part, a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if local.contains(char::is_whitespace) || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

pub fn is_valid_username(username: &str) -> bool {
    username.len() >= MIN_USERNAME_LEN
}
