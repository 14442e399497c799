use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry on the shopping checklist.
///
/// Items come from two places: manual adds (title typed by the user,
/// category resolved against the catalog) and recipe imports (name and
/// quantity from the generated grocery list, category carried over from
/// the generation response). Both end up in the same ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl GroceryItem {
    /// Category for ordering purposes; a missing category compares as `""`.
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
