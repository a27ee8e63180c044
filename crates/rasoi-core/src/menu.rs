//! Menu wire types.
//!
//! The weekly menu is an opaque payload keyed by day-of-week then meal slot.
//! The client checks for existence and renders; it never validates the
//! menu's internal shape beyond what deserialization requires.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Days in render order. The server keys menus by these names.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Response of `POST /generate-menu`, `GET /current-menu` and
/// `POST /regenerate-meal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResponse {
    /// day -> meal slot -> dish name
    pub menu: BTreeMap<String, BTreeMap<String, String>>,
    /// The preference snapshot the server generated from; opaque to the client
    #[serde(default)]
    pub preferences_used: serde_json::Value,
    /// Server-side generation timestamp (ISO 8601 string, not re-parsed here)
    pub generated_at: String,
    #[serde(default)]
    pub menu_id: Option<i64>,
}

impl MenuResponse {
    /// Looks up one dish, if the server produced that cell.
    pub fn dish(&self, day: &str, meal: &str) -> Option<&str> {
        self.menu.get(day)?.get(meal).map(String::as_str)
    }
}

/// Body of `POST /generate-menu`. The server accepts an empty object for a
/// plain generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuGenerateRequest {
    /// Optional "Monday-lunch" style hint for a targeted regeneration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regenerate_meal: Option<String>,
}

/// Body of `POST /regenerate-meal`: replace one cell of an existing menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRegenerateRequest {
    pub menu_id: i64,
    pub day: String,
    pub meal: String,
}

/// One summary record from `GET /menu-history`.
///
/// Ordering is server-provided; the client only ever takes a prefix for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuHistoryEntry {
    pub id: i64,
    pub generated_at: String,
    pub is_active: bool,
    /// day -> dish names, a flattened preview of the full menu
    #[serde(default)]
    pub menu_preview: BTreeMap<String, Vec<String>>,
}

/// The `{"menus": [...]}` wrapper the server puts around history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuHistoryResponse {
    pub menus: Vec<MenuHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_response_dish_lookup() {
        let raw = serde_json::json!({
            "menu": {
                "Monday": {"breakfast": "Poha", "lunch": "Dal Tadka"},
                "Tuesday": {"breakfast": "Upma"}
            },
            "preferences_used": {"diet_type": "veg"},
            "generated_at": "2025-01-06T08:00:00Z",
            "menu_id": 7
        });
        let menu: MenuResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(menu.dish("Monday", "lunch"), Some("Dal Tadka"));
        assert_eq!(menu.dish("Monday", "dinner"), None);
        assert_eq!(menu.dish("Sunday", "lunch"), None);
        assert_eq!(menu.menu_id, Some(7));
    }

    #[test]
    fn test_generate_request_serializes_empty_object_by_default() {
        let body = serde_json::to_string(&MenuGenerateRequest::default()).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_string(&MenuGenerateRequest {
            regenerate_meal: Some("Monday-lunch".to_string()),
        })
        .unwrap();
        assert_eq!(body, r#"{"regenerate_meal":"Monday-lunch"}"#);
    }

    #[test]
    fn test_history_entry_tolerates_missing_preview() {
        let raw = serde_json::json!({
            "id": 3,
            "generated_at": "2025-01-01T12:00:00Z",
            "is_active": false
        });
        let entry: MenuHistoryEntry = serde_json::from_value(raw).unwrap();
        assert!(entry.menu_preview.is_empty());
    }
}
