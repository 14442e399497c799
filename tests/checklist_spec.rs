use recigo::catalog::{CategoryCatalog, OTHER_CATEGORY};
use recigo::checklist::{
    add_item, clear_completed, merge_recipe_items, sort_by_category, toggle_all, toggle_item,
    ChecklistError,
};
use recigo::models::{CategorizedItem, GroceryItem};
use recigo::store::{decode_snapshot, ChecklistStore};
use speculate2::speculate;
use std::collections::BTreeMap;
use uuid::Uuid;

fn item(title: &str, category: Option<&str>, completed: bool) -> GroceryItem {
    GroceryItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        notes: None,
        completed,
        category: category.map(String::from),
        quantity: None,
    }
}

fn test_catalog() -> CategoryCatalog {
    CategoryCatalog::from_entries([
        ("chicken".to_string(), "Meats".to_string()),
        ("chickpeas".to_string(), "Canned Goods".to_string()),
        ("milk".to_string(), "Dairy".to_string()),
        ("apple".to_string(), "Produce".to_string()),
    ])
}

speculate! {
    describe "category resolution" {
        it "returns the mapped category for exact dictionary keys" {
            let catalog = test_catalog();
            assert_eq!(catalog.resolve("chicken"), "Meats");
            assert_eq!(catalog.resolve("milk"), "Dairy");
        }

        it "prefers the exact key over a close fuzzy neighbor" {
            let catalog = test_catalog();
            // "chickpeas" is an exact key; "chicken" must not steal it.
            assert_eq!(catalog.resolve("chickpeas"), "Canned Goods");
        }

        it "fuzzy-matches common typos below the threshold" {
            let catalog = test_catalog();
            assert_eq!(catalog.resolve("chikken"), "Meats");
        }

        it "matches case-insensitively through the fuzzy index" {
            let catalog = test_catalog();
            assert_eq!(catalog.resolve("Milk"), "Dairy");
        }

        it "falls back to Other when nothing scores below the threshold" {
            let catalog = test_catalog();
            assert_eq!(catalog.resolve("wrench"), OTHER_CATEGORY);
            assert_eq!(catalog.resolve("xqzvw"), OTHER_CATEGORY);
        }

        it "never fails on empty input" {
            let catalog = test_catalog();
            assert_eq!(catalog.resolve(""), OTHER_CATEGORY);
        }

        it "resolves typos against the builtin catalog" {
            let catalog = CategoryCatalog::builtin();
            assert_eq!(catalog.resolve("chikken"), "Meats");
            assert_eq!(catalog.resolve("Olive oil"), "Oils & Sauces");
        }
    }

    describe "sort_by_category" {
        it "clusters known categories alphabetically with Other last" {
            let items = vec![
                item("Milk", Some("Dairy"), false),
                item("Foo", Some("Other"), false),
                item("Apple", Some("Produce"), false),
            ];

            let sorted = sort_by_category(&items);
            let titles: Vec<&str> = sorted.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["Milk", "Apple", "Foo"]);
        }

        it "is idempotent" {
            let items = vec![
                item("Foo", Some("Other"), false),
                item("Bread", Some("Bakery & Bread"), false),
                item("Milk", Some("Dairy"), true),
                item("Mystery", None, false),
            ];

            let once = sort_by_category(&items);
            let twice = sort_by_category(&once);
            assert_eq!(once, twice);
        }

        it "is stable within a category" {
            let first = item("Milk", Some("Dairy"), false);
            let second = item("Butter", Some("Dairy"), false);
            let items = vec![first.clone(), second.clone()];

            let sorted = sort_by_category(&items);
            assert_eq!(sorted[0].id, first.id);
            assert_eq!(sorted[1].id, second.id);
        }

        it "never places Other before a known category" {
            let items = vec![
                item("Gadget", Some("Other"), false),
                item("Zucchini", Some("Produce"), false),
                item("Widget", Some("Other"), false),
                item("Almonds", Some("Pantry Staples/Dry Goods"), false),
            ];

            let sorted = sort_by_category(&items);
            let first_other = sorted
                .iter()
                .position(|i| i.category.as_deref() == Some("Other"))
                .unwrap();
            assert!(sorted[first_other..]
                .iter()
                .all(|i| i.category.as_deref() == Some("Other")));
        }

        it "treats a missing category as empty string, sorting before named ones" {
            let items = vec![
                item("Milk", Some("Dairy"), false),
                item("Mystery", None, false),
            ];

            let sorted = sort_by_category(&items);
            assert_eq!(sorted[0].title, "Mystery");
            assert_eq!(sorted[1].title, "Milk");
        }

        it "does not modify its input" {
            let items = vec![
                item("Foo", Some("Other"), false),
                item("Milk", Some("Dairy"), false),
            ];
            let snapshot = items.clone();

            let _ = sort_by_category(&items);
            assert_eq!(items, snapshot);
        }
    }

    describe "add_item" {
        it "rejects an empty title" {
            let catalog = test_catalog();
            let result = add_item(&[], "", None, &catalog);
            assert!(matches!(result, Err(ChecklistError::EmptyTitle)));
        }

        it "rejects a whitespace-only title" {
            let catalog = test_catalog();
            let result = add_item(&[], "   \t", None, &catalog);
            assert!(matches!(result, Err(ChecklistError::EmptyTitle)));
        }

        it "resolves the category and starts unchecked" {
            let catalog = test_catalog();
            let items = add_item(&[], "milk", Some("2%"), &catalog).unwrap();

            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "milk");
            assert_eq!(items[0].category.as_deref(), Some("Dairy"));
            assert_eq!(items[0].notes.as_deref(), Some("2%"));
            assert!(!items[0].completed);
        }

        it "trims the title and drops empty notes" {
            let catalog = test_catalog();
            let items = add_item(&[], "  apple  ", Some("  "), &catalog).unwrap();

            assert_eq!(items[0].title, "apple");
            assert!(items[0].notes.is_none());
        }

        it "returns a sorted sequence" {
            let catalog = test_catalog();
            let existing = vec![item("Gadget", Some("Other"), false)];

            let items = add_item(&existing, "milk", None, &catalog).unwrap();
            assert_eq!(items[0].title, "milk");
            assert_eq!(items[1].title, "Gadget");
        }
    }

    describe "toggle_item" {
        it "flips completion on the matching item only" {
            let a = item("Milk", Some("Dairy"), false);
            let b = item("Apple", Some("Produce"), false);
            let items = vec![a.clone(), b.clone()];

            let toggled = toggle_item(&items, a.id).unwrap();
            let milk = toggled.iter().find(|i| i.id == a.id).unwrap();
            let apple = toggled.iter().find(|i| i.id == b.id).unwrap();
            assert!(milk.completed);
            assert!(!apple.completed);
        }

        it "reports an unknown id and leaves the sequence unchanged" {
            let items = vec![item("Milk", Some("Dairy"), false)];
            let snapshot = items.clone();

            let result = toggle_item(&items, Uuid::new_v4());
            assert!(matches!(result, Err(ChecklistError::ItemNotFound(_))));
            assert_eq!(items, snapshot);
        }

        it "keeps the ordering intact" {
            let a = item("Milk", Some("Dairy"), false);
            let b = item("Apple", Some("Produce"), false);
            let items = sort_by_category(&[a.clone(), b.clone()]);

            let toggled = toggle_item(&items, b.id).unwrap();
            let order_before: Vec<Uuid> = items.iter().map(|i| i.id).collect();
            let order_after: Vec<Uuid> = toggled.iter().map(|i| i.id).collect();
            assert_eq!(order_before, order_after);
        }
    }

    describe "clear_completed" {
        it "reports nothing to clear when no item is completed" {
            let items = vec![item("Milk", Some("Dairy"), false)];
            let result = clear_completed(&items);
            assert!(matches!(result, Err(ChecklistError::NothingToClear)));
        }

        it "removes only completed items" {
            let keep = item("Milk", Some("Dairy"), false);
            let done = item("Apple", Some("Produce"), true);
            let items = vec![keep.clone(), done];

            let remaining = clear_completed(&items).unwrap();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].id, keep.id);
        }
    }

    describe "toggle_all" {
        it "checks everything when some items are unchecked" {
            let items = vec![
                item("Milk", Some("Dairy"), true),
                item("Apple", Some("Produce"), false),
            ];

            let toggled = toggle_all(&items);
            assert!(toggled.iter().all(|i| i.completed));
        }

        it "unchecks everything when all items are checked" {
            let items = vec![
                item("Milk", Some("Dairy"), true),
                item("Apple", Some("Produce"), true),
            ];

            let toggled = toggle_all(&items);
            assert!(toggled.iter().all(|i| !i.completed));
        }
    }

    describe "merge_recipe_items" {
        it "carries the grouping category without consulting the catalog" {
            let mut grouped = BTreeMap::new();
            grouped.insert(
                "Meats".to_string(),
                vec![CategorizedItem {
                    name: "Chicken breast".to_string(),
                    quantity: "1 pack (2)".to_string(),
                }],
            );
            grouped.insert(
                "Dairy".to_string(),
                vec![CategorizedItem {
                    name: "Milk".to_string(),
                    quantity: "1 quart".to_string(),
                }],
            );

            let merged = merge_recipe_items(&[], &grouped);
            assert_eq!(merged.len(), 2);
            assert_eq!(merged[0].category.as_deref(), Some("Dairy"));
            assert_eq!(merged[0].quantity.as_deref(), Some("1 quart"));
            assert_eq!(merged[1].category.as_deref(), Some("Meats"));
            assert!(merged.iter().all(|i| !i.completed));
        }

        it "appends to the existing list and re-sorts" {
            let existing = vec![item("Gadget", Some("Other"), false)];
            let mut grouped = BTreeMap::new();
            grouped.insert(
                "Produce".to_string(),
                vec![CategorizedItem {
                    name: "Apples".to_string(),
                    quantity: "1 bag (3 lbs)".to_string(),
                }],
            );

            let merged = merge_recipe_items(&existing, &grouped);
            assert_eq!(merged.len(), 2);
            assert_eq!(merged[0].title, "Apples");
            assert_eq!(merged[1].title, "Gadget");
        }

        it "assigns a fresh id per merged entry" {
            let mut grouped = BTreeMap::new();
            grouped.insert(
                "Dairy".to_string(),
                vec![
                    CategorizedItem { name: "Milk".to_string(), quantity: "1 quart".to_string() },
                    CategorizedItem { name: "Butter".to_string(), quantity: "1 box".to_string() },
                ],
            );

            let merged = merge_recipe_items(&[], &grouped);
            assert_ne!(merged[0].id, merged[1].id);
        }
    }

    describe "checklist store" {
        before {
            let store = ChecklistStore::open_memory().expect("Failed to open in-memory store");
            store.migrate().expect("Failed to migrate");
        }

        it "loads an empty list when nothing was saved" {
            let items = store.load().expect("Load failed");
            assert!(items.is_empty());
        }

        it "round-trips the checklist through a save" {
            let items = vec![
                item("Milk", Some("Dairy"), false),
                item("Gadget", Some("Other"), true),
            ];

            store.save(&items).expect("Save failed");
            let loaded = store.load().expect("Load failed");
            assert_eq!(loaded.len(), 2);
            assert_eq!(loaded[0].title, "Milk");
            assert_eq!(loaded[1].title, "Gadget");
        }

        it "never persists an unsorted sequence" {
            let items = vec![
                item("Gadget", Some("Other"), false),
                item("Milk", Some("Dairy"), false),
            ];

            let written = store.save(&items).expect("Save failed");
            assert_eq!(written[0].title, "Milk");

            let loaded = store.load().expect("Load failed");
            assert_eq!(loaded[0].title, "Milk");
            assert_eq!(loaded[1].title, "Gadget");
        }

        it "replaces the previous snapshot wholesale" {
            store
                .save(&[item("Milk", Some("Dairy"), false)])
                .expect("Save failed");
            store
                .save(&[item("Apple", Some("Produce"), false)])
                .expect("Save failed");

            let loaded = store.load().expect("Load failed");
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].title, "Apple");
        }
    }

    describe "snapshot decoding" {
        it "silently drops entries without a completed field" {
            let raw = format!(
                r#"[{{"note":"junk"}}, 42, {{"id":"{}","title":"Milk","completed":false,"category":"Dairy"}}]"#,
                Uuid::new_v4()
            );

            let items = decode_snapshot(&raw);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "Milk");
        }

        it "resets to empty when the payload is not an array" {
            assert!(decode_snapshot("{\"completed\":true}").is_empty());
            assert!(decode_snapshot("not json at all").is_empty());
        }
    }
}

#[test]
fn persists_across_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recigo.db");

    {
        let store = ChecklistStore::open(path.clone()).expect("Failed to open store");
        store.migrate().expect("Failed to migrate");
        store
            .save(&[item("Milk", Some("Dairy"), false)])
            .expect("Save failed");
    }

    let store = ChecklistStore::open(path).expect("Failed to reopen store");
    store.migrate().expect("Failed to migrate");
    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Milk");
}
