// ABOUTME: Product label models: the ten label nutrients, parsed label output, allergy report
// ABOUTME: Derived per product from free-text certification data; never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrients read from a product nutrition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelNutrient {
    /// 열량
    Calories,
    /// 나트륨
    Sodium,
    /// 탄수화물
    Carbohydrate,
    /// 당류
    Sugars,
    /// 지방
    Fat,
    /// 트랜스지방
    TransFat,
    /// 포화지방
    SaturatedFat,
    /// 콜레스테롤
    Cholesterol,
    /// 단백질
    Protein,
    /// 칼슘
    Calcium,
}

impl LabelNutrient {
    /// Every label nutrient in base display order (before sorting by percentage)
    pub const ALL: [Self; 10] = [
        Self::Calories,
        Self::Sodium,
        Self::Carbohydrate,
        Self::Sugars,
        Self::Fat,
        Self::TransFat,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Protein,
        Self::Calcium,
    ];

    /// Name as printed on Korean labels
    #[must_use]
    pub const fn label_name(self) -> &'static str {
        match self {
            Self::Calories => "열량",
            Self::Sodium => "나트륨",
            Self::Carbohydrate => "탄수화물",
            Self::Sugars => "당류",
            Self::Fat => "지방",
            Self::TransFat => "트랜스지방",
            Self::SaturatedFat => "포화지방",
            Self::Cholesterol => "콜레스테롤",
            Self::Protein => "단백질",
            Self::Calcium => "칼슘",
        }
    }

    /// Unit appended to the extracted value
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Sodium | Self::Calcium | Self::Cholesterol => "mg",
            Self::Carbohydrate
            | Self::Sugars
            | Self::Fat
            | Self::TransFat
            | Self::SaturatedFat
            | Self::Protein => "g",
        }
    }

    /// Whether labels print a %-of-daily-value for this nutrient
    #[must_use]
    pub const fn has_daily_value(self) -> bool {
        !matches!(self, Self::Calories | Self::TransFat)
    }
}

impl fmt::Display for LabelNutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_name())
    }
}

/// One nutrient line extracted from a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientFact {
    /// Label name (e.g. `나트륨`)
    pub name: String,
    /// Number with unit suffix (e.g. `620mg`); `0<unit>` when absent
    pub value: String,
    /// Percent of daily value; 0 when absent
    pub percentage: u32,
}

/// Parsed nutrition label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLabel {
    /// Serving-size text, when a known dialect matched
    pub serving_info: Option<String>,
    /// Nutrient lines sorted descending by percentage (stable)
    pub nutrients: Vec<NutrientFact>,
    /// Comma-delimited clauses naming more than one nutrient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ambiguous_clauses: Vec<String>,
}

impl ParsedLabel {
    /// Label with no information (unknown or empty source text)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            serving_info: None,
            nutrients: Vec::new(),
            ambiguous_clauses: Vec::new(),
        }
    }

    /// Whether nothing was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.serving_info.is_none() && self.nutrients.is_empty()
    }

    /// Line for a nutrient by label name
    #[must_use]
    pub fn nutrient(&self, name: &str) -> Option<&NutrientFact> {
        self.nutrients.iter().find(|fact| fact.name == name)
    }
}

/// Allergy badge derived from the certification allergy text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergyStatus {
    /// No usable allergy information
    Unknown,
    /// Product declares no allergens
    Safe,
    /// Product declares allergens
    Warning,
}

/// Allergy information prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyReport {
    /// Badge classification
    pub status: AllergyStatus,
    /// Allergen text with the trailing "contains" marker removed
    pub cleaned: Option<String>,
}

/// Everything derived from one product's certification record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLabelReport {
    /// Parsed nutrition label
    pub nutrition: ParsedLabel,
    /// Allergy badge and text
    pub allergy: AllergyReport,
}
