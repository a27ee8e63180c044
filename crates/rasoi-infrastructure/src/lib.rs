pub mod config_service;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use config_service::ConfigService;
pub use paths::RasoiPaths;
pub use session_store::FileSessionStore;
