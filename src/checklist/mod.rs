//! Pure mutation operations over the checklist state.
//!
//! Every operation takes the current ordered sequence and returns a new
//! sequence that has already been through [`sort_by_category`]; callers
//! persist the result as a whole. Nothing here touches storage or the
//! network.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{CategoryCatalog, OTHER_CATEGORY};
use crate::models::{CategorizedItem, GroceryItem};

#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Item titles must contain at least one non-whitespace character.
    #[error("item title must not be empty")]
    EmptyTitle,

    /// A mutation referenced an id that is not on the list. Callers log
    /// this and treat the mutation as a no-op.
    #[error("no grocery item with id {0}")]
    ItemNotFound(Uuid),

    /// Clear was requested while no item was completed.
    #[error("no completed items to clear")]
    NothingToClear,
}

/// Return a new sequence ordered by store category.
///
/// Known categories cluster alphabetically (case-insensitive), items
/// without a category compare as `""`, and `"Other"` always sinks to the
/// bottom regardless of its alphabetic position. The sort is stable, so
/// ties keep their relative input order. Sorting an already-sorted
/// sequence is a no-op.
pub fn sort_by_category(items: &[GroceryItem]) -> Vec<GroceryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_categories(a.category_or_empty(), b.category_or_empty()));
    sorted
}

fn compare_categories(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a == OTHER_CATEGORY {
        return Ordering::Greater;
    }
    if b == OTHER_CATEGORY {
        return Ordering::Less;
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Add a manually entered item, resolving its category via the catalog.
///
/// The title is trimmed; empty or whitespace-only titles are rejected.
/// Empty notes are dropped rather than stored as `Some("")`.
pub fn add_item(
    items: &[GroceryItem],
    title: &str,
    notes: Option<&str>,
    catalog: &CategoryCatalog,
) -> Result<Vec<GroceryItem>, ChecklistError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ChecklistError::EmptyTitle);
    }

    let category = catalog.resolve(title);
    let item = GroceryItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        notes: notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from),
        completed: false,
        category: Some(category),
        quantity: None,
    };

    let mut next = items.to_vec();
    next.push(item);
    Ok(sort_by_category(&next))
}

/// Flip `completed` on the item with the given id.
///
/// Categories are untouched, so the relative order cannot change; the
/// result still goes through the sort to uphold the ordering invariant.
pub fn toggle_item(items: &[GroceryItem], id: Uuid) -> Result<Vec<GroceryItem>, ChecklistError> {
    if !items.iter().any(|item| item.id == id) {
        return Err(ChecklistError::ItemNotFound(id));
    }

    let next: Vec<GroceryItem> = items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.id == id {
                item.completed = !item.completed;
            }
            item
        })
        .collect();
    Ok(sort_by_category(&next))
}

/// Remove every completed item.
pub fn clear_completed(items: &[GroceryItem]) -> Result<Vec<GroceryItem>, ChecklistError> {
    if !items.iter().any(|item| item.completed) {
        return Err(ChecklistError::NothingToClear);
    }

    let remaining: Vec<GroceryItem> = items
        .iter()
        .filter(|item| !item.completed)
        .cloned()
        .collect();
    Ok(sort_by_category(&remaining))
}

/// Select or deselect every item: if all are already completed, uncheck
/// them all; otherwise check them all.
pub fn toggle_all(items: &[GroceryItem]) -> Vec<GroceryItem> {
    let all_completed = items.iter().all(|item| item.completed);
    items
        .iter()
        .cloned()
        .map(|mut item| {
            item.completed = !all_completed;
            item
        })
        .collect()
}

/// Merge items from a generated grocery list into the checklist.
///
/// The grouping already carries the category for each item, so the
/// catalog is bypassed entirely. Each entry gets a fresh id and starts
/// unchecked.
pub fn merge_recipe_items(
    items: &[GroceryItem],
    grouped: &BTreeMap<String, Vec<CategorizedItem>>,
) -> Vec<GroceryItem> {
    let mut next = items.to_vec();
    for (category, entries) in grouped {
        for entry in entries {
            next.push(GroceryItem {
                id: Uuid::new_v4(),
                title: entry.name.clone(),
                notes: None,
                completed: false,
                category: Some(category.clone()),
                quantity: Some(entry.quantity.clone()),
            });
        }
    }
    sort_by_category(&next)
}
