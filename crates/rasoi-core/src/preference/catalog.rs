//! The fixed preference catalog.
//!
//! Five categories, each with a closed set of options. Option identifiers
//! are the only values that ever enter a selection; anything outside the
//! catalog is dropped at the boundary.

use serde::{Deserialize, Serialize};

/// One of the five fixed preference groups, in wizard step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Diet,
    Cuisine,
    Meals,
    Time,
    Health,
}

impl Category {
    /// All categories in wizard step order.
    pub const ALL: [Category; 5] = [
        Category::Diet,
        Category::Cuisine,
        Category::Meals,
        Category::Time,
        Category::Health,
    ];

    /// Stable identifier, matching the remote vocabulary.
    pub fn id(self) -> &'static str {
        match self {
            Category::Diet => "diet",
            Category::Cuisine => "cuisine",
            Category::Meals => "meals",
            Category::Time => "time",
            Category::Health => "health",
        }
    }

    /// Human-readable title for rendering.
    pub fn title(self) -> &'static str {
        match self {
            Category::Diet => "Dietary Preferences",
            Category::Cuisine => "Favorite Cuisines",
            Category::Meals => "Meal Times",
            Category::Time => "Cooking Time",
            Category::Health => "Health Considerations",
        }
    }

    /// Single-select categories replace the previous choice; the rest
    /// toggle options independently.
    pub fn is_single_select(self) -> bool {
        matches!(self, Category::Diet | Category::Time)
    }

    /// Parses a category id.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.id() == id)
    }
}

/// One selectable option within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    pub label: &'static str,
}

const DIET_OPTIONS: [CatalogOption; 3] = [
    CatalogOption { id: "veg", label: "Vegetarian" },
    CatalogOption { id: "non-veg", label: "Non-Vegetarian" },
    CatalogOption { id: "vegan", label: "Vegan" },
];

const CUISINE_OPTIONS: [CatalogOption; 8] = [
    CatalogOption { id: "north-indian", label: "North Indian" },
    CatalogOption { id: "south-indian", label: "South Indian" },
    CatalogOption { id: "marathi", label: "Marathi" },
    CatalogOption { id: "bengali", label: "Bengali" },
    CatalogOption { id: "gujarati", label: "Gujarati" },
    CatalogOption { id: "punjabi", label: "Punjabi" },
    CatalogOption { id: "rajasthani", label: "Rajasthani" },
    CatalogOption { id: "chinese", label: "Chinese" },
];

const MEAL_OPTIONS: [CatalogOption; 4] = [
    CatalogOption { id: "breakfast", label: "Breakfast" },
    CatalogOption { id: "lunch", label: "Lunch" },
    CatalogOption { id: "snacks", label: "Snacks" },
    CatalogOption { id: "dinner", label: "Dinner" },
];

const TIME_OPTIONS: [CatalogOption; 3] = [
    CatalogOption { id: "quick", label: "< 15 minutes" },
    CatalogOption { id: "medium", label: "< 30 minutes" },
    CatalogOption { id: "slow", label: "< 45 minutes" },
];

const HEALTH_OPTIONS: [CatalogOption; 3] = [
    CatalogOption { id: "diabetes", label: "Diabetes Friendly" },
    CatalogOption { id: "bp", label: "Blood Pressure" },
    CatalogOption { id: "cholesterol", label: "Cholesterol" },
];

/// Cooking-time id <-> wire value, both directions through the same table.
const COOKING_TIME_VALUES: [(&str, &str); 3] = [
    ("quick", "<15min"),
    ("medium", "<30min"),
    ("slow", "<45min"),
];

/// Returns the options of a category, in display order.
pub fn options(category: Category) -> &'static [CatalogOption] {
    match category {
        Category::Diet => &DIET_OPTIONS,
        Category::Cuisine => &CUISINE_OPTIONS,
        Category::Meals => &MEAL_OPTIONS,
        Category::Time => &TIME_OPTIONS,
        Category::Health => &HEALTH_OPTIONS,
    }
}

/// Looks up an option by id within a category.
pub fn find_option(category: Category, option_id: &str) -> Option<&'static CatalogOption> {
    options(category).iter().find(|o| o.id == option_id)
}

/// Returns true iff `option_id` belongs to `category`.
pub fn is_known(category: Category, option_id: &str) -> bool {
    find_option(category, option_id).is_some()
}

/// Maps a cooking-time option id to its wire value (`quick` -> `<15min`).
pub fn cooking_time_value(option_id: &str) -> Option<&'static str> {
    COOKING_TIME_VALUES
        .iter()
        .find(|(id, _)| *id == option_id)
        .map(|(_, value)| *value)
}

/// Maps a wire value back to its option id (`<15min` -> `quick`).
pub fn cooking_time_id(value: &str) -> Option<&'static str> {
    COOKING_TIME_VALUES
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_ids() {
        let ids: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["diet", "cuisine", "meals", "time", "health"]);
        assert_eq!(Category::from_id("time"), Some(Category::Time));
        assert_eq!(Category::from_id("dessert"), None);
    }

    #[test]
    fn test_single_select_categories() {
        assert!(Category::Diet.is_single_select());
        assert!(Category::Time.is_single_select());
        assert!(!Category::Cuisine.is_single_select());
        assert!(!Category::Meals.is_single_select());
        assert!(!Category::Health.is_single_select());
    }

    #[test]
    fn test_cooking_time_map_is_bidirectional() {
        for (id, value) in COOKING_TIME_VALUES {
            assert_eq!(cooking_time_value(id), Some(value));
            assert_eq!(cooking_time_id(value), Some(id));
        }
        assert_eq!(cooking_time_value("instant"), None);
        assert_eq!(cooking_time_id("<5min"), None);
    }

    #[test]
    fn test_option_lookup() {
        assert!(is_known(Category::Cuisine, "bengali"));
        assert!(!is_known(Category::Cuisine, "italian"));
        // Ids are scoped to their category
        assert!(!is_known(Category::Diet, "bengali"));
        assert_eq!(
            find_option(Category::Health, "bp").map(|o| o.label),
            Some("Blood Pressure")
        );
    }
}
