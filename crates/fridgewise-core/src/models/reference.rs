// ABOUTME: Reference-table models: age bands, gender policy, standards and food composition rows
// ABOUTME: Immutable rows loaded once from flat tables and never mutated at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use super::OrderedMap;
use crate::constants::gender_labels;
use crate::numeric::parse_leading_f64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age band keying the nutrition standards table.
///
/// Bands are closed, non-overlapping, and cover every age from 15 upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// 15 to 18 years
    Teen15To18,
    /// 19 to 29 years
    Adult19To29,
    /// 30 to 49 years
    Adult30To49,
    /// 50 to 64 years
    Adult50To64,
    /// 65 to 74 years
    Senior65To74,
    /// 75 years and older
    Senior75Plus,
}

impl AgeBand {
    /// Every band, youngest first
    pub const ALL: [Self; 6] = [
        Self::Teen15To18,
        Self::Adult19To29,
        Self::Adult30To49,
        Self::Adult50To64,
        Self::Senior65To74,
        Self::Senior75Plus,
    ];

    /// Band containing `age`, or `None` below the youngest band
    #[must_use]
    pub const fn from_age(age: u32) -> Option<Self> {
        match age {
            0..=14 => None,
            15..=18 => Some(Self::Teen15To18),
            19..=29 => Some(Self::Adult19To29),
            30..=49 => Some(Self::Adult30To49),
            50..=64 => Some(Self::Adult50To64),
            65..=74 => Some(Self::Senior65To74),
            _ => Some(Self::Senior75Plus),
        }
    }

    /// Label used in the `연령` column of the standards table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Teen15To18 => "15-18세",
            Self::Adult19To29 => "19-29세",
            Self::Adult30To49 => "30-49세",
            Self::Adult50To64 => "50-64세",
            Self::Senior65To74 => "65-74세",
            Self::Senior75Plus => "75세 이상",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender keying the nutrition standards table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male rows (`남성`)
    Male,
    /// Female rows (`여성`)
    Female,
}

impl Gender {
    /// Normalize a free-form gender token.
    ///
    /// Closed-world policy: `남성`, `남자`, `male` and `m` (case-insensitive)
    /// select the male rows; every other token, including unrecognized ones,
    /// selects the female rows. Unrecognized tokens are never rejected.
    #[must_use]
    pub fn normalize(token: &str) -> Self {
        let lowered = token.to_lowercase();
        if gender_labels::MALE_TOKENS.contains(&lowered.as_str()) {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Label used in the `성별` column of the standards table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => gender_labels::MALE,
            Self::Female => gender_labels::FEMALE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the nutrition standards table.
///
/// Nutrient values are kept as loaded; consumers parse them with
/// [`parse_leading_f64`] and decide how to treat non-numeric cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionStandardRow {
    /// Age band label (`연령` column)
    pub age_band: String,
    /// Gender label (`성별` column)
    pub gender: String,
    /// Recommended daily intake per nutrient column, in table order
    pub values: OrderedMap<String>,
}

impl NutritionStandardRow {
    /// Build a row from its identity and nutrient cells
    pub fn new<K, V, I>(
        age_band: impl Into<String>,
        gender: impl Into<String>,
        values: I,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            age_band: age_band.into(),
            gender: gender.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k, Into::<String>::into(v)))
                .collect(),
        }
    }

    /// Raw cell for a nutrient
    #[must_use]
    pub fn value(&self, nutrient: &str) -> Option<&str> {
        self.values.get(nutrient).map(String::as_str)
    }

    /// Whether the row is keyed by the given band and gender labels
    #[must_use]
    pub fn matches(&self, age_band: &str, gender: &str) -> bool {
        self.age_band == age_band && self.gender == gender
    }
}

/// One row of the food composition table (amounts per 100 g)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCompositionRow {
    /// Food name (`식품명` column); not guaranteed unique
    pub name: String,
    /// Nutrient amounts per 100 g, in table order, as loaded
    pub nutrients: OrderedMap<String>,
}

impl FoodCompositionRow {
    /// Build a row from its name and nutrient cells
    pub fn new<K, V, I>(name: impl Into<String>, nutrients: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            name: name.into(),
            nutrients: nutrients
                .into_iter()
                .map(|(k, v)| (k, Into::<String>::into(v)))
                .collect(),
        }
    }

    /// Raw cell for a nutrient
    #[must_use]
    pub fn nutrient(&self, nutrient: &str) -> Option<&str> {
        self.nutrients.get(nutrient).map(String::as_str)
    }

    /// Numeric amount for a nutrient, `None` when missing, empty or non-numeric
    #[must_use]
    pub fn numeric(&self, nutrient: &str) -> Option<f64> {
        self.nutrient(nutrient).and_then(parse_leading_f64)
    }
}
