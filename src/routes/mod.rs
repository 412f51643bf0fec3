// ABOUTME: Route module organization for the Fridgewise HTTP API
// ABOUTME: Groups routes by domain and assembles the router with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Route module for the Fridgewise server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the intelligence crate.

/// Health check route
pub mod health;
/// Refrigerator consumption and expiry routes
pub mod inventory;
/// Standard lookup, intake analysis, and food search routes
pub mod nutrition;
/// Product label and allergy routes
pub mod products;
/// Recipe text parsing routes
pub mod recipes;

pub use health::HealthRoutes;
pub use inventory::InventoryRoutes;
pub use nutrition::NutritionRoutes;
pub use products::ProductRoutes;
pub use recipes::RecipeRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble every route with request tracing and CORS
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(ProductRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(InventoryRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
