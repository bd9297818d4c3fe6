//! Order aggregate as loaded from the commerce API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::OrderId;
use crate::claim::Claim;
use crate::error::ReturnsError;
use crate::line_item::LineItem;
use crate::serde_util::null_as_empty;
use crate::swap::Swap;

/// An order, or a claim viewed as an order, with its after-sales history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub claims: Vec<Claim>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub swaps: Vec<Swap>,
}

impl Order {
    /// Creates an order with the given items and no claims or swaps
    pub fn new(items: Vec<LineItem>) -> Self {
        Self {
            id: None,
            items,
            claims: Vec::new(),
            swaps: Vec::new(),
        }
    }

    /// Parses an order from untyped JSON.
    ///
    /// `items` must be present and be a list. Missing or null `claims`,
    /// `swaps`, `claim_items` and `additional_items` are read as empty.
    pub fn from_value(value: Value) -> Result<Self, ReturnsError> {
        let Some(fields) = value.as_object() else {
            return Err(ReturnsError::invalid_input("order must be a JSON object"));
        };

        match fields.get("items") {
            Some(Value::Array(_)) => {}
            Some(_) => return Err(ReturnsError::invalid_input("order.items must be a list")),
            None => return Err(ReturnsError::invalid_input("order.items is missing")),
        }

        serde_json::from_value(value).map_err(|e| ReturnsError::invalid_input(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_items_rejected() {
        let err = Order::from_value(json!({ "claims": [] })).unwrap_err();
        assert_eq!(err, ReturnsError::invalid_input("order.items is missing"));
    }

    #[test]
    fn test_null_collections_default_to_empty() {
        let order = Order::from_value(json!({
            "items": [],
            "claims": null,
            "swaps": null,
        }))
        .unwrap();

        assert!(order.claims.is_empty());
        assert!(order.swaps.is_empty());
    }
}
