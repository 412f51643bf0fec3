// ABOUTME: Product label route handlers for certified food products
// ABOUTME: Parses nutrition label text and classifies allergy information
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::intelligence::{parse_labels, product_label_report};
use crate::models::{ParsedLabel, ProductLabelReport};
use crate::resources::ServerResources;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Certification fields for one product
#[derive(Debug, Default, Deserialize)]
pub struct ProductLabelRequest {
    /// Free-text nutrition label
    #[serde(default)]
    pub nutrients: Option<String>,
    /// Free-text allergen list
    #[serde(default, alias = "allergyInfo")]
    pub allergy_info: Option<String>,
}

/// Several nutrition labels parsed in one call
#[derive(Debug, Deserialize)]
pub struct LabelBatchRequest {
    /// Label texts; `null` entries parse to empty labels
    pub labels: Vec<Option<String>>,
}

/// Product label routes
pub struct ProductRoutes;

impl ProductRoutes {
    /// Create all product label routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/products/label", post(Self::handle_product_label))
            .route("/products/labels", post(Self::handle_label_batch))
            .with_state(resources)
    }

    /// Handle one product's label and allergy text
    async fn handle_product_label(
        Json(request): Json<ProductLabelRequest>,
    ) -> Json<ProductLabelReport> {
        Json(product_label_report(
            request.nutrients.as_deref(),
            request.allergy_info.as_deref(),
        ))
    }

    /// Handle a batch of label texts, answered in request order
    async fn handle_label_batch(Json(request): Json<LabelBatchRequest>) -> Json<Vec<ParsedLabel>> {
        Json(parse_labels(&request.labels))
    }
}
