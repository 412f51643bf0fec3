// ABOUTME: Allergy badge classification and allergen text cleanup for product pages
// ABOUTME: Combines with the label parser into one report per certified product
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::label_parser::parse_label;
use fridgewise_core::constants::label_sentinels::{
    CONTAINS_SUFFIX, NO_ALLERGENS, UNKNOWN_ALLERGY,
};
use fridgewise_core::models::{AllergyReport, AllergyStatus, ProductLabelReport};

/// Classify certification allergy text.
///
/// Absent, blank, and sentinel values are [`AllergyStatus::Unknown`]; the
/// literal `없음` is [`AllergyStatus::Safe`]; anything else lists allergens.
#[must_use]
pub fn classify_allergy(info: Option<&str>) -> AllergyStatus {
    let Some(trimmed) = info.map(str::trim) else {
        return AllergyStatus::Unknown;
    };
    if trimmed.is_empty() || UNKNOWN_ALLERGY.contains(&trimmed) {
        AllergyStatus::Unknown
    } else if trimmed == NO_ALLERGENS {
        AllergyStatus::Safe
    } else {
        AllergyStatus::Warning
    }
}

/// Drop a trailing `함유` marker (and the whitespace around it).
///
/// Text without the marker is returned unchanged.
#[must_use]
pub fn clean_allergy_info(info: &str) -> &str {
    info.trim_end()
        .strip_suffix(CONTAINS_SUFFIX)
        .map_or(info, str::trim_end)
}

/// Badge plus cleaned text
#[must_use]
pub fn allergy_report(info: Option<&str>) -> AllergyReport {
    AllergyReport {
        status: classify_allergy(info),
        cleaned: info.map(|text| clean_allergy_info(text).to_owned()),
    }
}

/// Parsed nutrition label and allergy report for one product
#[must_use]
pub fn product_label_report(nutrients: Option<&str>, allergy_info: Option<&str>) -> ProductLabelReport {
    ProductLabelReport {
        nutrition: parse_label(nutrients),
        allergy: allergy_report(allergy_info),
    }
}
