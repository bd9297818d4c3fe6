//! Order line items

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use core_kernel::{LineItemId, VariantId};

/// A line item on an order, or an item added to the order by a claim or swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier
    pub id: LineItemId,
    /// Quantity ordered
    pub quantity: u32,
    /// Quantity handed to the carrier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_quantity: Option<u32>,
    /// Quantity fulfilled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled_quantity: Option<u32>,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Product variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    /// Any other attribute supplied by the commerce API, passed through as-is
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// Creates a line item with only an id and a quantity
    pub fn new(id: LineItemId, quantity: u32) -> Self {
        Self {
            id,
            quantity,
            shipped_quantity: None,
            fulfilled_quantity: None,
            title: None,
            variant_id: None,
            attributes: Map::new(),
        }
    }

    /// Whether a claim's additional item has progressed far enough to be returned.
    ///
    /// True when some quantity has shipped, or when the shipped and fulfilled
    /// quantities agree (this includes both being zero or both unset).
    pub fn is_shipped_or_settled(&self) -> bool {
        let shipped = matches!(self.shipped_quantity, Some(q) if q > 0);
        shipped || self.shipped_quantity == self.fulfilled_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(shipped: Option<u32>, fulfilled: Option<u32>) -> LineItem {
        LineItem {
            shipped_quantity: shipped,
            fulfilled_quantity: fulfilled,
            ..LineItem::new(LineItemId::new(), 1)
        }
    }

    #[test]
    fn test_shipped_gate() {
        assert!(item(Some(1), Some(3)).is_shipped_or_settled());
        assert!(item(Some(2), None).is_shipped_or_settled());
        assert!(item(Some(0), Some(0)).is_shipped_or_settled());
        assert!(item(None, None).is_shipped_or_settled());
        assert!(!item(Some(0), Some(1)).is_shipped_or_settled());
        assert!(!item(None, Some(1)).is_shipped_or_settled());
        assert!(!item(Some(0), None).is_shipped_or_settled());
    }
}
