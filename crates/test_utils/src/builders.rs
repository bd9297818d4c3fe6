//! Test Data Builders
//!
//! Provides builder patterns for constructing after-sales test data with
//! sensible defaults. Tests specify only the fields they care about.
//! Identifiers are given as plain strings and must not be blank.

use core_kernel::{ClaimId, LineItemId, SwapId};
use domain_returns::{
    Claim, ClaimItem, ClaimPaymentStatus, FulfillmentStatus, LineItem, Order, ReturnOrder,
    ReturnStatus, Swap,
};
use serde_json::Value;

/// Parses a test identifier
pub fn item_id(id: &str) -> LineItemId {
    LineItemId::parse(id).expect("test line item id must not be blank")
}

/// Builder for constructing test line items
pub struct TestLineItemBuilder {
    item: LineItem,
}

impl TestLineItemBuilder {
    /// Creates a new builder for the given id and quantity
    pub fn new(id: &str, quantity: u32) -> Self {
        Self {
            item: LineItem::new(item_id(id), quantity),
        }
    }

    /// Sets the shipped quantity
    pub fn shipped(mut self, quantity: u32) -> Self {
        self.item.shipped_quantity = Some(quantity);
        self
    }

    /// Sets the fulfilled quantity
    pub fn fulfilled(mut self, quantity: u32) -> Self {
        self.item.fulfilled_quantity = Some(quantity);
        self
    }

    /// Sets the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = Some(title.into());
        self
    }

    /// Adds a pass-through attribute
    pub fn attribute(mut self, key: &str, value: Value) -> Self {
        self.item.attributes.insert(key.to_string(), value);
        self
    }

    /// Builds the line item
    pub fn build(self) -> LineItem {
        self.item
    }
}

/// Builder for constructing test claims.
///
/// Defaults to a fulfilled, refunded claim without a return order.
pub struct TestClaimBuilder {
    claim: Claim,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim: Claim {
                id: Some(ClaimId::new()),
                claim_items: Vec::new(),
                additional_items: Vec::new(),
                fulfillment_status: FulfillmentStatus::Fulfilled,
                payment_status: ClaimPaymentStatus::Refunded,
                return_order: None,
            },
        }
    }

    /// Adds a claimed quantity of an original item
    pub fn claim_item(mut self, id: &str, quantity: u32) -> Self {
        self.claim.claim_items.push(ClaimItem::new(item_id(id), quantity));
        self
    }

    /// Adds a replacement item
    pub fn additional_item(mut self, item: LineItem) -> Self {
        self.claim.additional_items.push(item);
        self
    }

    /// Sets the fulfillment status
    pub fn fulfillment_status(mut self, status: FulfillmentStatus) -> Self {
        self.claim.fulfillment_status = status;
        self
    }

    /// Sets the payment status
    pub fn payment_status(mut self, status: ClaimPaymentStatus) -> Self {
        self.claim.payment_status = status;
        self
    }

    /// Marks the claim as neither fulfilled nor paid
    pub fn pending(self) -> Self {
        self.fulfillment_status(FulfillmentStatus::NotFulfilled)
            .payment_status(ClaimPaymentStatus::Na)
    }

    /// Attaches a return order with the given status
    pub fn return_status(mut self, status: ReturnStatus) -> Self {
        self.claim.return_order = Some(ReturnOrder { id: None, status });
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        self.claim
    }
}

/// Builder for constructing test swaps.
///
/// Defaults to a fulfilled swap.
pub struct TestSwapBuilder {
    swap: Swap,
}

impl Default for TestSwapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSwapBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            swap: Swap {
                id: Some(SwapId::new()),
                additional_items: Vec::new(),
                fulfillment_status: FulfillmentStatus::Fulfilled,
            },
        }
    }

    /// Adds an exchange item
    pub fn additional_item(mut self, item: LineItem) -> Self {
        self.swap.additional_items.push(item);
        self
    }

    /// Sets the fulfillment status
    pub fn fulfillment_status(mut self, status: FulfillmentStatus) -> Self {
        self.swap.fulfillment_status = status;
        self
    }

    /// Builds the swap
    pub fn build(self) -> Swap {
        self.swap
    }
}

/// Builder for constructing test orders
#[derive(Default)]
pub struct TestOrderBuilder {
    items: Vec<LineItem>,
    claims: Vec<Claim>,
    swaps: Vec<Swap>,
}

impl TestOrderBuilder {
    /// Creates an empty order builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain line item
    pub fn item(mut self, id: &str, quantity: u32) -> Self {
        self.items.push(TestLineItemBuilder::new(id, quantity).build());
        self
    }

    /// Adds a prepared line item
    pub fn line_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a claim
    pub fn claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Adds a swap
    pub fn swap(mut self, swap: Swap) -> Self {
        self.swaps.push(swap);
        self
    }

    /// Builds the order
    pub fn build(self) -> Order {
        Order {
            id: None,
            items: self.items,
            claims: self.claims,
            swaps: self.swaps,
        }
    }
}
