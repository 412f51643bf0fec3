// ABOUTME: Ranks foods richest in each deficient nutrient
// ABOUTME: Top three foods by per-100 g content, strictly positive amounts only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Deficiency food recommendations

use fridgewise_core::constants::policy::MAX_RECOMMENDATIONS_PER_NUTRIENT;
use fridgewise_core::models::{FoodCompositionRow, FoodRecommendation, Recommendations};
use tracing::debug;

/// Suggest foods for each deficient nutrient.
///
/// Every deficient nutrient gets an entry, possibly empty when no food has a
/// positive amount. Entries keep the order of `deficient`.
#[must_use]
pub fn recommend<S: AsRef<str>>(deficient: &[S], foods: &[FoodCompositionRow]) -> Recommendations {
    let mut recommendations = Recommendations::new();
    for nutrient in deficient {
        let nutrient = nutrient.as_ref();
        let ranked = rank_foods_for(nutrient, foods, MAX_RECOMMENDATIONS_PER_NUTRIENT);
        debug!(nutrient, candidates = ranked.len(), "Ranked foods for deficient nutrient");
        recommendations.insert(nutrient, ranked);
    }
    recommendations
}

/// Up to `limit` foods with a positive amount of `nutrient`, richest first.
///
/// Foods with equal amounts keep their table order.
#[must_use]
pub fn rank_foods_for(
    nutrient: &str,
    foods: &[FoodCompositionRow],
    limit: usize,
) -> Vec<FoodRecommendation> {
    let mut candidates: Vec<FoodRecommendation> = foods
        .iter()
        .filter_map(|food| {
            food.numeric(nutrient)
                .filter(|amount| *amount > 0.0)
                .map(|amount| FoodRecommendation {
                    food_name: food.name.clone(),
                    amount,
                })
        })
        .collect();
    candidates.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    candidates.truncate(limit);
    candidates
}
