//! HTTP API Layer
//!
//! This crate exposes returnable item resolution to the back-office
//! dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for orders and claims
//! - **Middleware**: Request id assignment and request logging
//! - **DTOs**: Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_returns::ReturnableItemsResolver;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{health, returns};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub resolver: ReturnableItemsResolver,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let resolver = ReturnableItemsResolver::new(config.over_claim_policy);
    let state = AppState { config, resolver };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let api_routes = Router::new()
        .route("/orders/returnable-items", post(returns::order_returnable_items))
        .route("/claims/returnable-items", post(returns::claim_returnable_items));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
