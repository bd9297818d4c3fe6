//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! returns test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built orders for the documented reconciliation scenarios
//! - `builders`: Builder patterns for line items, claims, swaps and orders
//! - `assertions`: Custom assertion helpers for returnable item sets
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
