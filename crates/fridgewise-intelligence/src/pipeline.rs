// ABOUTME: End-to-end analyze-nutrition flow from request to report
// ABOUTME: Lookup, aggregate, analyze, then recommend for nutrients under the threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::analyzer::analyze;
use crate::intake::aggregate_intake;
use crate::recommendation_engine::recommend;
use crate::standards::lookup_standard;
use fridgewise_core::constants::policy::DEFICIENCY_THRESHOLD_PERCENT;
use fridgewise_core::errors::NutritionError;
use fridgewise_core::models::{
    FoodCompositionRow, NutritionReport, NutritionRequest, NutritionStandardRow,
};
use tracing::info;

/// Analyze a day's intake and recommend foods for deficient nutrients.
///
/// A nutrient is deficient when its percentage is strictly below
/// [`DEFICIENCY_THRESHOLD_PERCENT`].
///
/// # Errors
///
/// Propagates the standard lookup errors.
pub fn analyze_nutrition(
    request: &NutritionRequest,
    standards: &[NutritionStandardRow],
    foods: &[FoodCompositionRow],
) -> Result<NutritionReport, NutritionError> {
    let standard = lookup_standard(request.age, &request.gender, standards)?;
    let intake = aggregate_intake(&request.food_intake, foods);
    let analysis = analyze(&intake, standard);
    let deficient = analysis.deficient_nutrients(DEFICIENCY_THRESHOLD_PERCENT);
    let recommendations = recommend(&deficient, foods);

    info!(
        age_band = %standard.age_band,
        gender = %standard.gender,
        entries = request.food_intake.len(),
        analyzed = analysis.len(),
        deficient = deficient.len(),
        "Nutrition analysis complete"
    );

    Ok(NutritionReport {
        analysis,
        recommendations,
    })
}
