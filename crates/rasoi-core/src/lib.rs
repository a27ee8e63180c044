pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod preference;
pub mod session;

// Re-export common error type
pub use error::{RasoiError, Result};
pub use gateway::ApiGateway;
pub use session::SessionStore;
