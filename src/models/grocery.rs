use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An item inside a generated grocery list: what to buy and how much,
/// sized for store packaging ("2 lbs", "1 bag").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedItem {
    pub name: String,
    pub quantity: String,
}

/// The validated shape of a grocery-list generation response.
///
/// `grocery_list` groups items by store category. `assumptions` records
/// what the generator assumed about servings and pantry staples; it is
/// informational and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub ingredients: Vec<String>,
    pub grocery_list: BTreeMap<String, Vec<CategorizedItem>>,
    #[serde(default)]
    pub assumptions: Vec<String>,
}
