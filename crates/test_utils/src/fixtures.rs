//! Pre-built Test Fixtures
//!
//! Ready-made orders for the reconciliation scenarios the resolver is
//! expected to handle. Every fixture uses item id `A` unless stated otherwise.

use domain_returns::{FulfillmentStatus, Order, ReturnStatus};
use serde_json::{json, Value};

use crate::builders::{TestClaimBuilder, TestLineItemBuilder, TestOrderBuilder, TestSwapBuilder};

/// Fixtures for returnable item scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// `A x5`, no claims or swaps
    pub fn plain_order() -> Order {
        TestOrderBuilder::new().item("A", 5).build()
    }

    /// `A x5` with a claim taking 2
    pub fn partially_claimed_order() -> Order {
        TestOrderBuilder::new()
            .item("A", 5)
            .claim(TestClaimBuilder::new().claim_item("A", 2).build())
            .build()
    }

    /// `A x5` with a claim taking all 5
    pub fn fully_claimed_order() -> Order {
        TestOrderBuilder::new()
            .item("A", 5)
            .claim(TestClaimBuilder::new().claim_item("A", 5).build())
            .build()
    }

    /// `A x5` with a claim taking 2 whose return was canceled
    pub fn canceled_return_order() -> Order {
        TestOrderBuilder::new()
            .item("A", 5)
            .claim(
                TestClaimBuilder::new()
                    .claim_item("A", 2)
                    .return_status(ReturnStatus::Canceled)
                    .build(),
            )
            .build()
    }

    /// `A x3` with a fulfilled swap replacing it by `A x7`
    pub fn swapped_order() -> Order {
        TestOrderBuilder::new()
            .item("A", 3)
            .swap(
                TestSwapBuilder::new()
                    .fulfillment_status(FulfillmentStatus::Fulfilled)
                    .additional_item(TestLineItemBuilder::new("A", 7).build())
                    .build(),
            )
            .build()
    }

    /// Raw JSON for [`ScenarioFixtures::partially_claimed_order`], as the commerce API sends it
    pub fn partially_claimed_order_json() -> Value {
        json!({
            "id": "order_01",
            "items": [
                { "id": "A", "quantity": 5, "title": "Linen shirt", "thumbnail": "shirt.png" }
            ],
            "claims": [
                {
                    "id": "claim_01",
                    "claim_items": [ { "item_id": "A", "quantity": 2 } ],
                    "additional_items": [],
                    "fulfillment_status": "fulfilled",
                    "payment_status": "refunded",
                    "return_order": null
                }
            ],
            "swaps": null
        })
    }

    /// Raw JSON for [`ScenarioFixtures::swapped_order`]
    pub fn swapped_order_json() -> Value {
        json!({
            "items": [ { "id": "A", "quantity": 3 } ],
            "swaps": [
                {
                    "fulfillment_status": "fulfilled",
                    "additional_items": [ { "id": "A", "quantity": 7 } ]
                }
            ]
        })
    }
}
