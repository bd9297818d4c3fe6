//! Returns DTOs

use serde::Serialize;

use domain_returns::LineItem;

#[derive(Debug, Serialize)]
pub struct ReturnableItemsResponse {
    pub items: Vec<LineItem>,
    pub count: usize,
}

impl From<Vec<LineItem>> for ReturnableItemsResponse {
    fn from(items: Vec<LineItem>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
