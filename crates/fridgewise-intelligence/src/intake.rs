// ABOUTME: Converts eaten foods into absolute daily nutrient totals
// ABOUTME: Composition is per 100 g, so each entry contributes value * grams / 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use fridgewise_core::models::{DailyIntake, FoodCompositionRow, IntakeEntry};
use fridgewise_core::numeric::parse_leading_f64;
use tracing::debug;

/// Sum nutrient contributions of every entry.
///
/// Entries whose name has no exact match in the composition table are
/// skipped. Non-numeric cells contribute nothing. Each nutrient total is
/// additive over entries, so the order of entries does not matter.
#[must_use]
pub fn aggregate_intake(entries: &[IntakeEntry], foods: &[FoodCompositionRow]) -> DailyIntake {
    let mut intake = DailyIntake::new();
    for entry in entries {
        let Some(food) = find_food(&entry.name, foods) else {
            debug!(food = %entry.name, "No composition row for food; entry skipped");
            continue;
        };
        let scale = entry.amount / 100.0;
        for (nutrient, raw) in food.nutrients.iter() {
            if let Some(per_100g) = parse_leading_f64(raw) {
                intake.add(nutrient, per_100g * scale);
            }
        }
    }
    intake
}

/// First composition row named exactly `name`
#[must_use]
pub fn find_food<'a>(name: &str, foods: &'a [FoodCompositionRow]) -> Option<&'a FoodCompositionRow> {
    foods.iter().find(|food| food.name == name)
}
