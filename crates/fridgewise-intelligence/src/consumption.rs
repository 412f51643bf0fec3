// ABOUTME: Monthly consumption pattern analysis over refrigerator usage records
// ABOUTME: Totals, top products by quantity, and each top product's share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use chrono::{DateTime, Months, NaiveDate, Utc};
use fridgewise_core::constants::policy::TOP_CONSUMED_PRODUCTS;
use fridgewise_core::models::{ConsumptionAnalysis, ConsumptionRecord, OrderedMap};
use tracing::debug;

/// Analyze usage in the calendar month up to `reference_time`.
///
/// Records dated before the same day one month earlier are ignored. Products
/// with equal quantities keep the order in which they first appear.
#[must_use]
pub fn analyze_consumption(
    records: &[ConsumptionRecord],
    reference_time: DateTime<Utc>,
) -> ConsumptionAnalysis {
    let window_start = window_start(reference_time);
    let in_window: Vec<&ConsumptionRecord> = records
        .iter()
        .filter(|record| record.usage_date.date_naive() >= window_start)
        .collect();

    let total_quantity: u64 = in_window
        .iter()
        .map(|record| u64::from(record.quantity_used))
        .sum();

    let mut per_product: Vec<(String, u64)> = Vec::new();
    for record in &in_window {
        let quantity = u64::from(record.quantity_used);
        match per_product
            .iter_mut()
            .find(|(name, _)| *name == record.product_name)
        {
            Some((_, total)) => *total += quantity,
            None => per_product.push((record.product_name.clone(), quantity)),
        }
    }
    per_product.sort_by(|a, b| b.1.cmp(&a.1));
    per_product.truncate(TOP_CONSUMED_PRODUCTS);

    let top_total: u64 = per_product.iter().map(|(_, quantity)| quantity).sum();
    let consumption_percentages = per_product
        .iter()
        .map(|(name, quantity)| (name.as_str(), share_percent(*quantity, top_total)))
        .collect();
    let product_consumption: OrderedMap<u64> = per_product.into_iter().collect();

    debug!(
        records = in_window.len(),
        products = product_consumption.len(),
        "Consumption analysis complete"
    );

    ConsumptionAnalysis {
        total_items: in_window.len(),
        total_quantity,
        product_consumption,
        consumption_percentages,
    }
}

fn window_start(reference_time: DateTime<Utc>) -> NaiveDate {
    let today = reference_time.date_naive();
    today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN)
}

fn share_percent(quantity: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = quantity as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
