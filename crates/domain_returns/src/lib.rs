//! After-Sales Returns Domain
//!
//! This crate models the after-sales view of an order (line items, claims,
//! swaps and their return orders) and derives which line items can still be
//! returned or exchanged.
//!
//! # Reconciliation
//!
//! ```text
//! order.items -> claim additional items -> swap additional items -> claimed quantities
//! ```
//!
//! Each step works on a private copy of the order's items keyed by line item
//! id; the caller's order is never modified.

pub mod line_item;
pub mod claim;
pub mod swap;
pub mod order;
pub mod status;
pub mod resolver;
pub mod error;

mod serde_util;

pub use line_item::LineItem;
pub use claim::{Claim, ClaimItem, ReturnOrder};
pub use swap::Swap;
pub use order::Order;
pub use status::{ClaimPaymentStatus, FulfillmentStatus, ReturnStatus};
pub use resolver::{resolve_returnable_items, OverClaimPolicy, ReturnableItemsResolver};
pub use error::ReturnsError;
