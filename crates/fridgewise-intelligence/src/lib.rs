// ABOUTME: Nutrition intelligence engine: label parsing, RDA analysis, and food recommendations
// ABOUTME: Pure functions over reference rows; no I/O and no shared mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![deny(unsafe_code)]

//! # Fridgewise Intelligence
//!
//! Everything in this crate is a pure function over immutable reference
//! rows, so callers may share the tables across threads and run requests
//! concurrently without locking.
//!
//! The analyze-nutrition pipeline runs, in order:
//!
//! 1. [`standards::lookup_standard`] picks the RDA row for an age and gender
//! 2. [`intake::aggregate_intake`] scales per-100 g composition into daily totals
//! 3. [`analyzer::analyze`] compares totals against the RDA row
//! 4. [`recommendation_engine::recommend`] ranks foods for deficient nutrients
//!
//! [`pipeline::analyze_nutrition`] wires the four steps together.

/// Allergy badge classification and text cleanup
pub mod allergy;
/// Percentage-of-RDA analysis
pub mod analyzer;
/// Monthly consumption pattern analysis
pub mod consumption;
/// Food composition search
pub mod food_search;
/// Daily intake aggregation
pub mod intake;
/// Expiring product window
pub mod inventory;
/// Korean nutrition label parser
pub mod label_parser;
/// Analyze-nutrition pipeline
pub mod pipeline;
/// Deficiency food recommendations
pub mod recommendation_engine;
/// Generated recipe text parsing
pub mod recipes;
/// Nutrition standard lookup
pub mod standards;

pub use allergy::{allergy_report, classify_allergy, clean_allergy_info, product_label_report};
pub use analyzer::analyze;
pub use consumption::analyze_consumption;
pub use food_search::search_foods;
pub use intake::aggregate_intake;
pub use inventory::expiring_products;
pub use label_parser::{parse_label, parse_labels};
pub use pipeline::analyze_nutrition;
pub use recommendation_engine::recommend;
pub use recipes::{parse_recipe_response, ParsedRecipe};
pub use standards::lookup_standard;

pub use fridgewise_core::{constants, errors, models};
