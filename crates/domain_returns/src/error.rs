//! Returns domain errors

use thiserror::Error;

use core_kernel::LineItemId;

/// Errors that can occur while deriving returnable items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Claimed quantity {claimed} exceeds returnable quantity {available} for line item {item_id}")]
    OverClaimed {
        item_id: LineItemId,
        available: u32,
        claimed: u32,
    },
}

impl ReturnsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ReturnsError::InvalidInput(message.into())
    }
}
