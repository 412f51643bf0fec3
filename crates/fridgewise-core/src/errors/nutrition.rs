// ABOUTME: Domain errors raised by the nutrition standard lookup
// ABOUTME: Converts typed lookup failures into AppError with matching HTTP semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Nutrition engine error types.
//!
//! Only the standard lookup can fail. Everything else the engine does
//! (unmatched foods, non-numeric cells, missing label patterns) resolves to
//! zero, `None`, or an empty collection instead of an error.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors surfaced by the nutrition engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// Age is below the youngest band of the standards table
    #[error("Age {age} is below the minimum supported age of {minimum}")]
    InvalidAge {
        /// Requested age
        age: u32,
        /// Youngest supported age
        minimum: u32,
    },

    /// The standards table has no row for a valid band/gender pair
    #[error("No nutrition standard for age band '{age_band}' and gender '{gender}'")]
    StandardNotFound {
        /// Age band label that was looked up
        age_band: String,
        /// Normalized gender label that was looked up
        gender: String,
    },
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let (code, details) = match &error {
            NutritionError::InvalidAge { age, minimum } => (
                ErrorCode::ValueOutOfRange,
                serde_json::json!({ "age": age, "minimum_age": minimum }),
            ),
            NutritionError::StandardNotFound { age_band, gender } => (
                ErrorCode::ResourceNotFound,
                serde_json::json!({ "age_band": age_band, "gender": gender }),
            ),
        };

        Self::new(code, error.to_string())
            .with_details(details)
            .with_source(error)
    }
}
