// ABOUTME: Intake analysis models: entries, daily totals, RDA percentages, and recommendations
// ABOUTME: Ephemeral per-request values built by the analysis pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use super::OrderedMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One food eaten, as submitted by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    /// Food name, matched exactly against the composition table
    #[serde(alias = "foodName")]
    pub name: String,
    /// Amount eaten in grams
    #[serde(alias = "amountGrams")]
    pub amount: f64,
}

impl IntakeEntry {
    /// Create an entry
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Analyze-nutrition request: who is eating and what they ate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRequest {
    /// Age in years
    pub age: u32,
    /// Free-form gender token, normalized by the standard lookup
    pub gender: String,
    /// Foods eaten
    #[serde(default, alias = "foodIntake")]
    pub food_intake: Vec<IntakeEntry>,
}

/// Accumulated absolute nutrient amounts for one analysis request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyIntake {
    totals: BTreeMap<String, f64>,
}

impl DailyIntake {
    /// Empty intake
    #[must_use]
    pub const fn new() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }

    /// Add an amount to a nutrient's running total
    pub fn add(&mut self, nutrient: &str, amount: f64) {
        *self.totals.entry(nutrient.to_owned()).or_insert(0.0) += amount;
    }

    /// Total for a nutrient, if any food contributed to it
    #[must_use]
    pub fn get(&self, nutrient: &str) -> Option<f64> {
        self.totals.get(nutrient).copied()
    }

    /// Total for a nutrient, zero when nothing contributed
    #[must_use]
    pub fn amount(&self, nutrient: &str) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    /// Fold another intake into this one
    pub fn merge(&mut self, other: &Self) {
        for (nutrient, amount) in &other.totals {
            self.add(nutrient, *amount);
        }
    }

    /// Iterate over (nutrient, total) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of nutrients with a total
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether no nutrient has a total
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Intake compared against the standard for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientIntake {
    /// Absolute amount eaten
    pub intake: f64,
    /// Recommended daily amount
    pub standard: f64,
    /// `intake / standard * 100`
    pub percentage: f64,
}

/// Percentage-of-RDA per nutrient, in the standards table's column order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientAnalysis {
    entries: OrderedMap<NutrientIntake>,
}

impl NutrientAnalysis {
    /// Empty analysis
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: OrderedMap::new(),
        }
    }

    /// Record a nutrient's result
    pub fn insert(&mut self, nutrient: impl Into<String>, result: NutrientIntake) {
        self.entries.insert(nutrient, result);
    }

    /// Result for a nutrient
    #[must_use]
    pub fn get(&self, nutrient: &str) -> Option<&NutrientIntake> {
        self.entries.get(nutrient)
    }

    /// Nutrients whose percentage is strictly below `threshold_percent`, in analysis order
    #[must_use]
    pub fn deficient_nutrients(&self, threshold_percent: f64) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, result)| result.percentage < threshold_percent)
            .map(|(nutrient, _)| nutrient.to_owned())
            .collect()
    }

    /// Iterate over (nutrient, result) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientIntake)> {
        self.entries.iter()
    }

    /// Number of analyzed nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was analyzed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A food suggested for a deficient nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    /// Food name from the composition table
    pub food_name: String,
    /// Nutrient amount per 100 g of the food
    pub amount: f64,
}

/// Ranked food suggestions per deficient nutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendations {
    entries: OrderedMap<Vec<FoodRecommendation>>,
}

impl Recommendations {
    /// Empty recommendations
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: OrderedMap::new(),
        }
    }

    /// Set the ranked foods for a nutrient
    pub fn insert(&mut self, nutrient: impl Into<String>, foods: Vec<FoodRecommendation>) {
        self.entries.insert(nutrient, foods);
    }

    /// Ranked foods for a nutrient
    #[must_use]
    pub fn get(&self, nutrient: &str) -> Option<&[FoodRecommendation]> {
        self.entries.get(nutrient).map(Vec::as_slice)
    }

    /// Iterate over (nutrient, foods) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<FoodRecommendation>)> {
        self.entries.iter()
    }

    /// Number of nutrients with an entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no nutrient has an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of the analyze-nutrition pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Percentage-of-RDA per nutrient
    pub analysis: NutrientAnalysis,
    /// Suggested foods per deficient nutrient
    pub recommendations: Recommendations,
}

/// Food search hit with every nutrient coerced to a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchResult {
    /// Food name
    pub name: String,
    /// Nutrient amounts per 100 g (non-numeric cells become zero)
    pub nutrients: OrderedMap<f64>,
}
