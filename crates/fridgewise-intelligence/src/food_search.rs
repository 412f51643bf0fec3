// ABOUTME: Case-insensitive substring search over the food composition table
// ABOUTME: Hits carry every nutrient as a number, zero where the cell is not numeric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use fridgewise_core::models::{FoodCompositionRow, FoodSearchResult};
use fridgewise_core::numeric::parse_f64_or_zero;

/// Foods whose name contains `query`, ignoring case, in table order, at most `limit`
#[must_use]
pub fn search_foods(query: &str, foods: &[FoodCompositionRow], limit: usize) -> Vec<FoodSearchResult> {
    let needle = query.to_lowercase();
    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .take(limit)
        .map(|food| FoodSearchResult {
            name: food.name.clone(),
            nutrients: food
                .nutrients
                .iter()
                .map(|(nutrient, raw)| (nutrient, parse_f64_or_zero(raw)))
                .collect(),
        })
        .collect()
}
