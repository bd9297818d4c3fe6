//! Swaps (exchanges) on an order

use serde::{Deserialize, Serialize};

use core_kernel::SwapId;
use crate::line_item::LineItem;
use crate::serde_util::null_as_empty;
use crate::status::FulfillmentStatus;

/// An exchange of items on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SwapId>,
    /// Items sent to the customer in exchange
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_items: Vec<LineItem>,
    pub fulfillment_status: FulfillmentStatus,
}

impl Swap {
    /// Whether the exchange items have not been fulfilled yet
    pub fn is_unfulfilled(&self) -> bool {
        self.fulfillment_status == FulfillmentStatus::NotFulfilled
    }
}
