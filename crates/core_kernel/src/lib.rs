//! Core Kernel - Foundational types shared by the commerce back-office crates
//!
//! This crate provides the building blocks used across the domain modules:
//! - Strongly-typed identifiers for orders, line items, claims, swaps and returns
//! - The common error type

pub mod identifiers;
pub mod error;

pub use identifiers::{
    LineItemId, OrderId, ClaimId, SwapId, ReturnId, VariantId,
};
pub use error::CoreError;
