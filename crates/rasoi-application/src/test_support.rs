//! In-memory gateway fake shared by the unit tests.

use async_trait::async_trait;
use rasoi_core::auth::{Acknowledgement, AuthToken, LoginRequest, ProtectedData, RegisterRequest};
use rasoi_core::gateway::ApiGateway;
use rasoi_core::menu::{
    MealRegenerateRequest, MenuGenerateRequest, MenuHistoryEntry, MenuResponse,
};
use rasoi_core::preference::PreferenceRecord;
use rasoi_core::{RasoiError, Result};
use std::sync::{Arc, Mutex};

/// Gateway whose every answer is canned up front.
///
/// Records the order of calls in `calls` and every saved preference record
/// in `saved_preferences` so tests can assert on what actually went out.
pub struct FakeGateway {
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    pub saved_preferences: Arc<Mutex<Vec<PreferenceRecord>>>,
    register: Result<Acknowledgement>,
    login: Result<AuthToken>,
    protected: Result<ProtectedData>,
    save: Result<Acknowledgement>,
    preferences: Result<PreferenceRecord>,
    generate: Result<MenuResponse>,
    current_menu: Result<MenuResponse>,
    regenerate: Result<MenuResponse>,
    history: Result<Vec<MenuHistoryEntry>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            saved_preferences: Arc::new(Mutex::new(Vec::new())),
            register: Ok(Acknowledgement {
                msg: "User registered successfully".to_string(),
            }),
            login: Ok(AuthToken {
                access_token: "tok-fake".to_string(),
                token_type: "bearer".to_string(),
            }),
            protected: Ok(ProtectedData {
                message: "This is protected data".to_string(),
                user: "alice".to_string(),
                user_id: Some(1),
            }),
            save: Ok(Acknowledgement {
                msg: "Preferences saved successfully".to_string(),
            }),
            preferences: Err(RasoiError::remote(404, "Preferences not found")),
            generate: Ok(Self::sample_menu(1)),
            current_menu: Err(RasoiError::remote(404, "No active menu found")),
            regenerate: Ok(Self::sample_menu(1)),
            history: Ok(Vec::new()),
        }
    }

    pub fn with_login(mut self, result: Result<AuthToken>) -> Self {
        self.login = result;
        self
    }

    pub fn with_protected(mut self, result: Result<ProtectedData>) -> Self {
        self.protected = result;
        self
    }

    pub fn with_preferences(mut self, result: Result<PreferenceRecord>) -> Self {
        self.preferences = result;
        self
    }

    pub fn with_save(mut self, result: Result<Acknowledgement>) -> Self {
        self.save = result;
        self
    }

    pub fn with_generate(mut self, result: Result<MenuResponse>) -> Self {
        self.generate = result;
        self
    }

    pub fn with_current_menu(mut self, result: Result<MenuResponse>) -> Self {
        self.current_menu = result;
        self
    }

    pub fn with_history(mut self, result: Result<Vec<MenuHistoryEntry>>) -> Self {
        self.history = result;
        self
    }

    pub fn sample_menu(menu_id: i64) -> MenuResponse {
        serde_json::from_value(serde_json::json!({
            "menu": {"Monday": {"breakfast": "Poha", "lunch": "Dal Tadka"}},
            "preferences_used": {"diet_type": "veg"},
            "generated_at": "2025-01-06T08:00:00Z",
            "menu_id": menu_id
        }))
        .unwrap()
    }

    pub fn sample_history_entry(id: i64, is_active: bool) -> MenuHistoryEntry {
        MenuHistoryEntry {
            id,
            generated_at: "2025-01-06T08:00:00Z".to_string(),
            is_active,
            menu_preview: Default::default(),
        }
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ApiGateway for FakeGateway {
    async fn register(&self, _request: &RegisterRequest) -> Result<Acknowledgement> {
        self.record("register");
        self.register.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthToken> {
        self.record("login");
        self.login.clone()
    }

    async fn get_protected(&self, _token: &str) -> Result<ProtectedData> {
        self.record("get_protected");
        self.protected.clone()
    }

    async fn save_preferences(
        &self,
        _token: &str,
        record: &PreferenceRecord,
    ) -> Result<Acknowledgement> {
        self.record("save_preferences");
        self.saved_preferences.lock().unwrap().push(record.clone());
        self.save.clone()
    }

    async fn get_preferences(&self, _token: &str) -> Result<PreferenceRecord> {
        self.record("get_preferences");
        self.preferences.clone()
    }

    async fn generate_menu(
        &self,
        _token: &str,
        _request: Option<&MenuGenerateRequest>,
    ) -> Result<MenuResponse> {
        self.record("generate_menu");
        self.generate.clone()
    }

    async fn get_current_menu(&self, _token: &str) -> Result<MenuResponse> {
        self.record("get_current_menu");
        self.current_menu.clone()
    }

    async fn regenerate_meal(
        &self,
        _token: &str,
        _request: &MealRegenerateRequest,
    ) -> Result<MenuResponse> {
        self.record("regenerate_meal");
        self.regenerate.clone()
    }

    async fn get_menu_history(&self, _token: &str, _limit: usize) -> Result<Vec<MenuHistoryEntry>> {
        self.record("get_menu_history");
        self.history.clone()
    }
}
