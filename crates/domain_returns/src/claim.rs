//! Claims raised against an order

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, LineItemId, ReturnId};
use crate::line_item::LineItem;
use crate::serde_util::null_as_empty;
use crate::status::{ClaimPaymentStatus, FulfillmentStatus, ReturnStatus};

/// Quantity of an original line item taken back by a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimItem {
    pub item_id: LineItemId,
    pub quantity: u32,
}

impl ClaimItem {
    pub fn new(item_id: LineItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

/// Return order attached to a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReturnId>,
    pub status: ReturnStatus,
}

/// A claim on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClaimId>,
    /// Original items claimed away
    #[serde(default, deserialize_with = "null_as_empty")]
    pub claim_items: Vec<ClaimItem>,
    /// Replacement items sent out by the claim
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_items: Vec<LineItem>,
    pub fulfillment_status: FulfillmentStatus,
    pub payment_status: ClaimPaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_order: Option<ReturnOrder>,
}

impl Claim {
    /// Whether the claim's return was canceled, voiding its claimed quantities
    pub fn is_return_canceled(&self) -> bool {
        self.return_order
            .as_ref()
            .is_some_and(|r| r.status == ReturnStatus::Canceled)
    }

    /// Whether the claim has neither been fulfilled nor settled.
    ///
    /// Additional items of such a claim are not yet returnable.
    pub fn is_pending(&self) -> bool {
        self.fulfillment_status == FulfillmentStatus::NotFulfilled
            && self.payment_status == ClaimPaymentStatus::Na
    }
}
