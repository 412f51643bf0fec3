// ABOUTME: Recipe route handler turning generated recipe text into a structured recipe
// ABOUTME: Rejects blank text; otherwise every missing section comes back empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::errors::AppError;
use crate::intelligence::{parse_recipe_response, ParsedRecipe};
use crate::resources::ServerResources;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Recipe text to parse
#[derive(Debug, Deserialize)]
pub struct RecipeParseRequest {
    /// Text with `요리명:`, `재료:` and `조리순서:` sections
    pub text: String,
}

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes/parse", post(Self::handle_parse_recipe))
            .with_state(resources)
    }

    async fn handle_parse_recipe(
        Json(request): Json<RecipeParseRequest>,
    ) -> Result<Json<ParsedRecipe>, AppError> {
        if request.text.trim().is_empty() {
            return Err(AppError::missing_field("text"));
        }
        Ok(Json(parse_recipe_response(&request.text)))
    }
}
