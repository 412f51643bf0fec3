// ABOUTME: Selects the recommended-daily-intake row for an age and gender
// ABOUTME: Applies the age band table and the default-female gender policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use fridgewise_core::constants::policy::MINIMUM_STANDARD_AGE;
use fridgewise_core::errors::NutritionError;
use fridgewise_core::models::{AgeBand, Gender, NutritionStandardRow};
use tracing::debug;

/// Find the standards row for `age` and a free-form `gender` token.
///
/// The first row whose band and gender labels both match wins.
///
/// # Errors
///
/// Returns [`NutritionError::InvalidAge`] below the youngest band and
/// [`NutritionError::StandardNotFound`] when the table has no matching row.
pub fn lookup_standard<'a>(
    age: u32,
    gender: &str,
    standards: &'a [NutritionStandardRow],
) -> Result<&'a NutritionStandardRow, NutritionError> {
    let band = AgeBand::from_age(age).ok_or(NutritionError::InvalidAge {
        age,
        minimum: MINIMUM_STANDARD_AGE,
    })?;
    let gender = Gender::normalize(gender);
    debug!(age, band = %band, gender = %gender, "Looking up nutrition standard");

    standards
        .iter()
        .find(|row| row.matches(band.label(), gender.label()))
        .ok_or_else(|| NutritionError::StandardNotFound {
            age_band: band.label().to_owned(),
            gender: gender.label().to_owned(),
        })
}
