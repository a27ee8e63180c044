pub mod auth_service;
pub mod dashboard;
pub mod preference_flow;
pub mod router;

pub use auth_service::AuthService;
pub use dashboard::{DashboardAggregator, DashboardView, GenerateOutcome};
pub use preference_flow::{HydrationOutcome, PreferenceFlow};
pub use router::{Screen, ScreenProps, SessionRouter};

#[cfg(test)]
mod test_support;
