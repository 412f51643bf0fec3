// ABOUTME: Core data models for reference tables, intake analysis, labels, and inventory
// ABOUTME: Re-exports every model type so callers can import from one path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Core data models.
//!
//! Reference rows are immutable after loading. Everything else is built
//! fresh per request and dropped with the response.

/// Refrigerator inventory and consumption models
pub mod inventory;
/// Product label and allergy models
pub mod label;
/// Intake, analysis, and recommendation models
pub mod nutrition;
/// Insertion-ordered map
pub mod ordered;
/// Standards and food composition reference rows
pub mod reference;

pub use inventory::{ConsumptionAnalysis, ConsumptionRecord, InventoryItem};
pub use label::{
    AllergyReport, AllergyStatus, LabelNutrient, NutrientFact, ParsedLabel, ProductLabelReport,
};
pub use nutrition::{
    DailyIntake, FoodRecommendation, FoodSearchResult, IntakeEntry, NutrientAnalysis,
    NutrientIntake, NutritionReport, NutritionRequest, Recommendations,
};
pub use ordered::OrderedMap;
pub use reference::{AgeBand, FoodCompositionRow, Gender, NutritionStandardRow};
