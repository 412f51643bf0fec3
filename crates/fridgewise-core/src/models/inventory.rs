// ABOUTME: Refrigerator inventory models: consumption log records and expiring products
// ABOUTME: Inputs and outputs of the consumption analysis and expiry window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use super::OrderedMap;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One consumption log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// When the product was used
    pub usage_date: DateTime<Utc>,
    /// Product name
    pub product_name: String,
    /// Units used
    pub quantity_used: u32,
}

/// Consumption pattern over the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionAnalysis {
    /// Number of records in the window
    pub total_items: usize,
    /// Units used across all records in the window
    pub total_quantity: u64,
    /// Most used products with their summed quantity, descending
    pub product_consumption: OrderedMap<u64>,
    /// Each top product's share of the top products' total, in percent (two decimals)
    pub consumption_percentages: OrderedMap<f64>,
}

/// A product stored in the refrigerator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Product name
    pub product_name: String,
    /// Expiration date
    pub expiration_date: NaiveDate,
}
