//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating orders with claims and swaps.
//! Ids are drawn from a small pool so that claims and swaps overlap with the
//! original items often.

use domain_returns::{
    Claim, ClaimItem, ClaimPaymentStatus, FulfillmentStatus, LineItem, Order, ReturnOrder,
    ReturnStatus, Swap,
};
use proptest::prelude::*;

use crate::builders::item_id;

static ID_POOL: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Strategy for generating pooled line item ids
pub fn pooled_id_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(&ID_POOL[..])
}

/// Strategy for generating fulfillment statuses, including unknown values
pub fn fulfillment_status_strategy() -> impl Strategy<Value = FulfillmentStatus> {
    prop_oneof![
        Just(FulfillmentStatus::NotFulfilled),
        Just(FulfillmentStatus::Fulfilled),
        Just(FulfillmentStatus::Shipped),
        Just(FulfillmentStatus::PartiallyShipped),
        Just(FulfillmentStatus::Other("awaiting_pickup".to_string())),
    ]
}

/// Strategy for generating claim payment statuses
pub fn payment_status_strategy() -> impl Strategy<Value = ClaimPaymentStatus> {
    prop_oneof![
        Just(ClaimPaymentStatus::Na),
        Just(ClaimPaymentStatus::NotRefunded),
        Just(ClaimPaymentStatus::Refunded),
    ]
}

/// Strategy for generating an optional return order
pub fn return_order_strategy() -> impl Strategy<Value = Option<ReturnOrder>> {
    prop_oneof![
        Just(None),
        Just(Some(ReturnOrder { id: None, status: ReturnStatus::Requested })),
        Just(Some(ReturnOrder { id: None, status: ReturnStatus::Received })),
        Just(Some(ReturnOrder { id: None, status: ReturnStatus::Canceled })),
    ]
}

/// Strategy for generating a line item with a pooled id
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (
        pooled_id_strategy(),
        0u32..10u32,
        proptest::option::of(0u32..5u32),
        proptest::option::of(0u32..5u32),
    )
        .prop_map(|(id, quantity, shipped, fulfilled)| LineItem {
            shipped_quantity: shipped,
            fulfilled_quantity: fulfilled,
            ..LineItem::new(item_id(id), quantity)
        })
}

/// Strategy for generating a claimed quantity
pub fn claim_item_strategy() -> impl Strategy<Value = ClaimItem> {
    (pooled_id_strategy(), 1u32..6u32).prop_map(|(id, quantity)| ClaimItem::new(item_id(id), quantity))
}

/// Strategy for generating claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        proptest::collection::vec(claim_item_strategy(), 0..3),
        proptest::collection::vec(line_item_strategy(), 0..3),
        fulfillment_status_strategy(),
        payment_status_strategy(),
        return_order_strategy(),
    )
        .prop_map(|(claim_items, additional_items, fulfillment_status, payment_status, return_order)| Claim {
            id: None,
            claim_items,
            additional_items,
            fulfillment_status,
            payment_status,
            return_order,
        })
}

/// Strategy for generating swaps
pub fn swap_strategy() -> impl Strategy<Value = Swap> {
    (
        proptest::collection::vec(line_item_strategy(), 0..3),
        fulfillment_status_strategy(),
    )
        .prop_map(|(additional_items, fulfillment_status)| Swap {
            id: None,
            additional_items,
            fulfillment_status,
        })
}

/// Strategy for generating orders without claims or swaps, one item per id
pub fn plain_order_strategy() -> impl Strategy<Value = Order> {
    (
        proptest::sample::subsequence(&ID_POOL[..], 0..=ID_POOL.len()),
        proptest::collection::vec(0u32..10u32, ID_POOL.len()),
    )
        .prop_map(|(ids, quantities)| {
            let items = ids
                .into_iter()
                .zip(quantities)
                .map(|(id, quantity)| LineItem::new(item_id(id), quantity))
                .collect();
            Order::new(items)
        })
}

/// Strategy for generating orders with claims and swaps
pub fn order_strategy() -> impl Strategy<Value = Order> {
    (
        proptest::collection::vec(line_item_strategy(), 0..6),
        proptest::collection::vec(claim_strategy(), 0..4),
        proptest::collection::vec(swap_strategy(), 0..3),
    )
        .prop_map(|(items, claims, swaps)| Order {
            id: None,
            items,
            claims,
            swaps,
        })
}
