// ABOUTME: Nutrition route handlers: standard lookup, intake analysis, and food search
// ABOUTME: Thin wrappers that delegate to the intelligence crate over shared reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Nutrition routes
//!
//! Age and gender select a row of the nutrition standards table; intake is
//! compared against it and foods are suggested for every nutrient below 90%.

use crate::errors::AppError;
use crate::intelligence::{analyze_nutrition, lookup_standard, search_foods};
use crate::models::{FoodSearchResult, NutritionReport, NutritionRequest, NutritionStandardRow};
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for the standard lookup
#[derive(Debug, Deserialize)]
pub struct StandardQuery {
    /// Age in years
    pub age: u32,
    /// Free-form gender token
    pub gender: String,
}

/// Query parameters for food search
#[derive(Debug, Deserialize)]
pub struct FoodSearchQuery {
    /// Case-insensitive substring of the food name
    pub name: String,
}

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/nutritional-info", get(Self::handle_nutritional_info))
            .route("/analyze-nutrition", post(Self::handle_analyze_nutrition))
            .route("/search-food", get(Self::handle_search_food))
            .with_state(resources)
    }

    /// Handle recommended daily intake lookup
    async fn handle_nutritional_info(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<StandardQuery>,
    ) -> Result<Json<NutritionStandardRow>, AppError> {
        let row = lookup_standard(params.age, &params.gender, resources.reference.standards())?;
        Ok(Json(row.clone()))
    }

    /// Handle intake analysis with deficiency recommendations
    async fn handle_analyze_nutrition(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<NutritionRequest>,
    ) -> Result<Json<NutritionReport>, AppError> {
        let reference = &resources.reference;
        let report = analyze_nutrition(&request, reference.standards(), reference.foods())?;
        Ok(Json(report))
    }

    /// Handle food search
    async fn handle_search_food(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<FoodSearchQuery>,
    ) -> Json<Vec<FoodSearchResult>> {
        let results = search_foods(
            &params.name,
            resources.reference.foods(),
            resources.config.food_search_limit,
        );
        debug!(query = %params.name, hits = results.len(), "Food search");
        Json(results)
    }
}
