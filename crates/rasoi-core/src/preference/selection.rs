//! Preference selection state and its mapping to the remote schema.

use super::catalog::{self, Category};
use serde::{Deserialize, Serialize};

/// Body of `POST /preferences` and response of `GET /preferences`.
///
/// Single-select categories travel as scalar strings (empty when unchosen),
/// multi-select categories as id lists. The cooking time is the catalog's
/// wire value, not the option id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub diet_type: String,
    pub cuisine: Vec<String>,
    pub meals: Vec<String>,
    pub cooking_time: String,
    pub health_conditions: Vec<String>,
}

/// The in-progress selection, one id list per category.
///
/// `diet` and `time` hold at most one id (selecting a new value replaces
/// the old one); `cuisine`, `meals` and `health` are toggle sets whose
/// order is selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSelection {
    pub diet: Vec<String>,
    pub cuisine: Vec<String>,
    pub meals: Vec<String>,
    pub time: Vec<String>,
    pub health: Vec<String>,
}

impl PreferenceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one user selection action.
    ///
    /// Single-select categories end up holding exactly `[option_id]`
    /// regardless of the prior value. Multi-select categories remove the id
    /// if present, else append it.
    pub fn toggle(&mut self, category: Category, option_id: &str) {
        let list = self.list_mut(category);
        if category.is_single_select() {
            list.clear();
            list.push(option_id.to_string());
        } else if let Some(pos) = list.iter().position(|id| id == option_id) {
            list.remove(pos);
        } else {
            list.push(option_id.to_string());
        }
    }

    /// Returns the ids selected in a category, in selection order.
    pub fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Diet => &self.diet,
            Category::Cuisine => &self.cuisine,
            Category::Meals => &self.meals,
            Category::Time => &self.time,
            Category::Health => &self.health,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Diet => &mut self.diet,
            Category::Cuisine => &mut self.cuisine,
            Category::Meals => &mut self.meals,
            Category::Time => &mut self.time,
            Category::Health => &mut self.health,
        }
    }

    pub fn is_selected(&self, category: Category, option_id: &str) -> bool {
        self.list(category).iter().any(|id| id == option_id)
    }

    /// Total number of selected ids across all five categories.
    pub fn selected_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.list(*c).len()).sum()
    }

    /// Maps the selection to the remote schema.
    ///
    /// The sole diet id (or empty string), the cooking-time wire value for
    /// the sole time id (or empty string), and the multi-select lists
    /// passed through as-is.
    pub fn to_record(&self) -> PreferenceRecord {
        PreferenceRecord {
            diet_type: self.diet.first().cloned().unwrap_or_default(),
            cuisine: self.cuisine.clone(),
            meals: self.meals.clone(),
            cooking_time: self
                .time
                .first()
                .and_then(|id| catalog::cooking_time_value(id))
                .unwrap_or_default()
                .to_string(),
            health_conditions: self.health.clone(),
        }
    }

    /// Rebuilds a selection from a stored remote record.
    ///
    /// Reverse-maps the cooking-time wire value through the catalog table
    /// and drops any id the catalog does not know; the catalog is closed
    /// and stale server data must not widen it.
    pub fn from_record(record: &PreferenceRecord) -> Self {
        let known = |category: Category| {
            move |id: &String| catalog::is_known(category, id).then(|| id.clone())
        };

        Self {
            diet: catalog::is_known(Category::Diet, &record.diet_type)
                .then(|| vec![record.diet_type.clone()])
                .unwrap_or_default(),
            cuisine: record.cuisine.iter().filter_map(known(Category::Cuisine)).collect(),
            meals: record.meals.iter().filter_map(known(Category::Meals)).collect(),
            time: catalog::cooking_time_id(&record.cooking_time)
                .map(|id| vec![id.to_string()])
                .unwrap_or_default(),
            health: record
                .health_conditions
                .iter()
                .filter_map(known(Category::Health))
                .collect(),
        }
    }
}
