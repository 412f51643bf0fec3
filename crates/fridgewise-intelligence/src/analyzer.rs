// ABOUTME: Compares daily intake totals against a recommended-daily-intake row
// ABOUTME: Produces intake, standard, and percentage per nutrient in table order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use fridgewise_core::models::{DailyIntake, NutrientAnalysis, NutrientIntake, NutritionStandardRow};
use fridgewise_core::numeric::parse_leading_f64;

/// Percentage of the standard reached for every numeric, non-zero standard value.
///
/// Nutrients the person did not eat count as zero intake. Standard cells
/// that are non-numeric or exactly zero are left out.
#[must_use]
pub fn analyze(intake: &DailyIntake, standard: &NutritionStandardRow) -> NutrientAnalysis {
    let mut analysis = NutrientAnalysis::new();
    for (nutrient, raw) in standard.values.iter() {
        let Some(standard_value) = parse_leading_f64(raw) else {
            continue;
        };
        if standard_value == 0.0 {
            continue;
        }
        let amount = intake.amount(nutrient);
        analysis.insert(
            nutrient,
            NutrientIntake {
                intake: amount,
                standard: standard_value,
                percentage: amount / standard_value * 100.0,
            },
        );
    }
    analysis
}
