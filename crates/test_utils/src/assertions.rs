//! Custom Test Assertions
//!
//! Assertion helpers for returnable item sets that give more meaningful
//! failure messages than a plain `assert_eq!` on a `Vec`.

use std::collections::HashSet;

use domain_returns::LineItem;

/// Returns the ids of `items` in order, as strings
pub fn item_ids(items: &[LineItem]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

/// Asserts that the item with `id` is present with `quantity`
///
/// # Panics
///
/// Panics if the item is missing or its quantity differs
pub fn assert_item_quantity(items: &[LineItem], id: &str, quantity: u32) {
    let item = items
        .iter()
        .find(|i| i.id.as_str() == id)
        .unwrap_or_else(|| panic!("Expected item {} in {:?}", id, item_ids(items)));

    assert_eq!(
        item.quantity, quantity,
        "Quantity mismatch for item {}: actual={}, expected={}",
        id, item.quantity, quantity
    );
}

/// Asserts that no item with `id` is present
pub fn assert_item_absent(items: &[LineItem], id: &str) {
    assert!(
        items.iter().all(|i| i.id.as_str() != id),
        "Expected item {} to be absent, got {:?}",
        id,
        item_ids(items)
    );
}

/// Asserts that every item has a positive quantity
pub fn assert_all_positive(items: &[LineItem]) {
    for item in items {
        assert!(item.quantity > 0, "Item {} has non-positive quantity", item.id);
    }
}

/// Asserts that no id appears twice
pub fn assert_unique_ids(items: &[LineItem]) {
    let mut seen = HashSet::new();
    for item in items {
        assert!(seen.insert(&item.id), "Duplicate item {} in result", item.id);
    }
}
