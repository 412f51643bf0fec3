// ABOUTME: Parses free-text Korean nutrition labels into serving info and per-nutrient facts
// ABOUTME: Serving dialects are an ordered pattern table; the comma is the clause delimiter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Korean nutrition label parser.
//!
//! Label text comes from the food certification service as one free-text
//! field per product. Manufacturers print it in many dialects, so parsing is
//! heuristic: each nutrient name is searched leftmost, and its value is the
//! first number with a unit that follows it inside the same comma clause.
//!
//! Because the search is leftmost, `지방` matches inside `포화지방` when the
//! saturated fat clause comes first. Clauses that name several nutrients are
//! reported in [`ParsedLabel::ambiguous_clauses`] so callers can tell when a
//! value may belong to a neighbour.

use fridgewise_core::constants::label_sentinels::UNKNOWN_NUTRIENTS;
use fridgewise_core::models::{LabelNutrient, NutrientFact, ParsedLabel};
use fridgewise_core::numeric::parse_leading_u32;
use rayon::prelude::*;
use regex::Regex;
use std::cmp::Reverse;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Serving-size dialects in priority order: (dialect name, pattern)
const SERVING_PATTERN_SOURCES: [(&str, &str); 13] = [
    ("total_content_kcal", r"(?i)총\s*내용량.*?kcal"),
    (
        "total_per_serving_header",
        r"(?i)\[총제공량/1회제공량\]\s*:\s*\d+",
    ),
    (
        "serving_kcal_header",
        r"(?i)\[1회제공량\s*칼로리\(Kcal\)\]\s*:\s*\d+",
    ),
    ("total_serving_packs", r"(?i)총\s*제공량\s*\d+g\(\d+g[Xx]\d+봉지\)"),
    ("per_pack_kcal", r"(?i)\d+봉지\(\d+g\)당\s*\d+kcal"),
    (
        "fractional_pack_serving",
        r"(?i)1회\s*제공량\s*\d+/\d+봉지\(\d+g\)\s*총\d+회\s*제공량\(\d+g\)",
    ),
    (
        "serving_then_total",
        r"(?i)1회\s*제공량\s*\(\d+g\)\s*총\s*\d+회\s*제공량\(\d+g\)",
    ),
    ("per_serving_slash", r"(?i)1회\s*제공량\(\d+g\)/1회\s*제공량당"),
    (
        "serving_slash_total",
        r"(?i)1회\s*제공량\(\d+g\)/\s*총\s*\d+회\s*제공량\(\d+g\)",
    ),
    ("serving_content_colon", r"(?i)1회\s*제공량.*?함량.*?:"),
    ("serving_total_paren", r"(?i)1회\s*제공량.*?총.*?제공량.*?\)"),
    ("per_grams_total_content", r"(?i)\d+g당/총\s*내용량\s*\d+g"),
    ("per_grams_content", r"(?i)\d+g당.*?내용량.*?g"),
];

/// A compiled serving-size dialect
#[derive(Debug)]
pub struct ServingPattern {
    /// Dialect name, stable across releases
    pub dialect: &'static str,
    /// Compiled pattern; the whole match is the serving info
    pub regex: Regex,
}

static SERVING_PATTERNS: LazyLock<Vec<ServingPattern>> = LazyLock::new(|| {
    SERVING_PATTERN_SOURCES
        .iter()
        .filter_map(|&(dialect, source)| {
            Regex::new(source)
                .ok()
                .map(|regex| ServingPattern { dialect, regex })
        })
        .collect()
});

struct NutrientPatterns {
    nutrient: LabelNutrient,
    value: Option<Regex>,
    percentage: Option<Regex>,
}

static NUTRIENT_PATTERNS: LazyLock<Vec<NutrientPatterns>> = LazyLock::new(|| {
    LabelNutrient::ALL
        .iter()
        .map(|&nutrient| {
            let name = regex::escape(nutrient.label_name());
            let value = Regex::new(&format!(r"(?i){name}[^,]*?([0-9,.]+)\s*(?:mg|g|kcal)")).ok();
            let percentage = if nutrient.has_daily_value() {
                Regex::new(&format!(r"(?i){name}[^,]*?([0-9,.]+)\s*%")).ok()
            } else {
                None
            };
            NutrientPatterns {
                nutrient,
                value,
                percentage,
            }
        })
        .collect()
});

/// Label names longest first, so nested names are consumed by their container
static NAMES_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names: Vec<&'static str> = LabelNutrient::ALL
        .iter()
        .map(|nutrient| nutrient.label_name())
        .collect();
    names.sort_by_key(|name| Reverse(name.chars().count()));
    names
});

/// Serving dialects in the order they are tried
#[must_use]
pub fn serving_patterns() -> &'static [ServingPattern] {
    &SERVING_PATTERNS
}

/// Parse one raw label.
///
/// Absent, blank, and "unknown" sentinel inputs produce an empty label.
/// The result lists all ten label nutrients, stably sorted descending by
/// percentage of daily value.
#[must_use]
pub fn parse_label(raw: Option<&str>) -> ParsedLabel {
    let Some(raw) = raw.filter(|text| !is_unknown_label(text)) else {
        return ParsedLabel::empty();
    };

    let clean = normalize_whitespace(raw);
    let serving_info = extract_serving_info(&clean);

    let mut nutrients: Vec<NutrientFact> = NUTRIENT_PATTERNS
        .iter()
        .map(|patterns| NutrientFact {
            name: patterns.nutrient.label_name().to_owned(),
            value: format!(
                "{}{}",
                extract_value(&clean, patterns.value.as_ref()),
                patterns.nutrient.unit()
            ),
            percentage: extract_percentage(&clean, patterns.percentage.as_ref()),
        })
        .collect();
    nutrients.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let ambiguous_clauses = find_ambiguous_clauses(&clean);
    if !ambiguous_clauses.is_empty() {
        warn!(
            clauses = ambiguous_clauses.len(),
            "Label clause names several nutrients; extracted values may belong to a neighbour"
        );
    }
    debug!(
        serving_found = serving_info.is_some(),
        "Parsed nutrition label"
    );

    ParsedLabel {
        serving_info,
        nutrients,
        ambiguous_clauses,
    }
}

/// Parse many labels in parallel, preserving input order
#[must_use]
pub fn parse_labels<S>(raws: &[Option<S>]) -> Vec<ParsedLabel>
where
    S: AsRef<str> + Sync,
{
    raws.par_iter()
        .map(|raw| parse_label(raw.as_ref().map(AsRef::as_ref)))
        .collect()
}

/// Dialect name of the first serving pattern matching the label, if any
#[must_use]
pub fn serving_dialect(raw: &str) -> Option<&'static str> {
    let clean = normalize_whitespace(raw);
    SERVING_PATTERNS
        .iter()
        .find(|pattern| pattern.regex.is_match(&clean))
        .map(|pattern| pattern.dialect)
}

fn is_unknown_label(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || UNKNOWN_NUTRIENTS.contains(&trimmed)
}

fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_serving_info(clean: &str) -> Option<String> {
    SERVING_PATTERNS.iter().find_map(|pattern| {
        pattern
            .regex
            .find(clean)
            .map(|found| found.as_str().to_owned())
    })
}

fn extract_value(clean: &str, pattern: Option<&Regex>) -> String {
    pattern
        .and_then(|regex| regex.captures(clean))
        .and_then(|captures| captures.get(1))
        .map_or_else(
            || "0".to_owned(),
            |number| number.as_str().replacen(',', ".", 1),
        )
}

fn extract_percentage(clean: &str, pattern: Option<&Regex>) -> u32 {
    pattern
        .and_then(|regex| regex.captures(clean))
        .and_then(|captures| captures.get(1))
        .and_then(|number| parse_leading_u32(number.as_str()))
        .unwrap_or(0)
}

fn find_ambiguous_clauses(clean: &str) -> Vec<String> {
    clean
        .split(',')
        .map(str::trim)
        .filter(|clause| count_nutrient_names(clause) > 1)
        .map(str::to_owned)
        .collect()
}

fn count_nutrient_names(clause: &str) -> usize {
    let mut remaining = clause.to_owned();
    let mut count = 0;
    for name in NAMES_LONGEST_FIRST.iter() {
        if remaining.contains(name) {
            count += 1;
            remaining = remaining.replace(name, " ");
        }
    }
    count
}
