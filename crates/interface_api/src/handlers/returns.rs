//! Returnable items handlers
//!
//! Bodies are taken as untyped JSON so that shape problems surface as
//! domain validation errors rather than extractor rejections.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::debug;

use domain_returns::Order;

use crate::{AppState, error::ApiError};
use crate::dto::returns::ReturnableItemsResponse;

/// Returnable items of an order, including its swaps
pub async fn order_returnable_items(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ReturnableItemsResponse>, ApiError> {
    resolve(&state, body, false)
}

/// Returnable items of a claim, evaluated on its own
pub async fn claim_returnable_items(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ReturnableItemsResponse>, ApiError> {
    resolve(&state, body, true)
}

fn resolve(state: &AppState, body: Value, is_claim: bool) -> Result<Json<ReturnableItemsResponse>, ApiError> {
    let order = Order::from_value(body)?;
    debug!(
        items = order.items.len(),
        claims = order.claims.len(),
        swaps = order.swaps.len(),
        is_claim,
        "Resolving returnable items"
    );

    let items = state.resolver.resolve(&order, is_claim)?;
    Ok(Json(items.into()))
}
