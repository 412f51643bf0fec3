// ABOUTME: Refrigerator inventory route handlers: consumption patterns and expiring products
// ABOUTME: Callers supply the records; the reference instant defaults to now
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::constants::policy::EXPIRY_WINDOW_DAYS;
use crate::intelligence::inventory::days_until_expiry;
use crate::intelligence::{analyze_consumption, expiring_products};
use crate::models::{ConsumptionAnalysis, ConsumptionRecord, InventoryItem};
use crate::resources::ServerResources;
use axum::{routing::post, Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Consumption log to analyze
#[derive(Debug, Deserialize)]
pub struct ConsumptionAnalysisRequest {
    /// Usage records, any order
    #[serde(default)]
    pub records: Vec<ConsumptionRecord>,
    /// End of the analysis window; now when absent
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,
}

/// Inventory to scan for soon-to-expire products
#[derive(Debug, Deserialize)]
pub struct ExpiringProductsRequest {
    /// Products in the refrigerator
    #[serde(default)]
    pub products: Vec<InventoryItem>,
    /// First day of the window; today (UTC) when absent
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Window length in days; 28 when absent
    #[serde(default)]
    pub window_days: Option<u32>,
}

/// A product inside the expiry window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringProduct {
    /// Product name
    pub product_name: String,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// Days left until expiration (0 on the last day)
    pub days_left: i64,
}

/// Inventory routes
pub struct InventoryRoutes;

impl InventoryRoutes {
    /// Create all inventory routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/consumption-analysis", post(Self::handle_consumption_analysis))
            .route("/expiring-products", post(Self::handle_expiring_products))
            .with_state(resources)
    }

    async fn handle_consumption_analysis(
        Json(request): Json<ConsumptionAnalysisRequest>,
    ) -> Json<ConsumptionAnalysis> {
        let reference_time = request.reference_time.unwrap_or_else(Utc::now);
        Json(analyze_consumption(&request.records, reference_time))
    }

    async fn handle_expiring_products(
        Json(request): Json<ExpiringProductsRequest>,
    ) -> Json<Vec<ExpiringProduct>> {
        let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
        let window_days = request.window_days.unwrap_or(EXPIRY_WINDOW_DAYS);

        let expiring = expiring_products(&request.products, today, window_days)
            .into_iter()
            .map(|item| ExpiringProduct {
                days_left: days_until_expiry(&item, today),
                product_name: item.product_name,
                expiration_date: item.expiration_date,
            })
            .collect();
        Json(expiring)
    }
}
