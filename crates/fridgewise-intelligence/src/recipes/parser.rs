// ABOUTME: Parses generated recipe text with 요리명, 재료 and 조리순서 sections
// ABOUTME: Tolerant of missing sections; each missing part comes back empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use super::models::ParsedRecipe;

const NAME_PREFIX: &str = "요리명:";
const INGREDIENTS_MARKER: &str = "재료:";
const STEPS_MARKER: &str = "조리순서:";

/// Parse recipe text.
///
/// - name: the first line with a leading `요리명:` removed; a text that
///   opens with a blank line has no name
/// - ingredients: text between `재료:` and the following `조리순서:`, split on
///   newlines and commas, leading dashes stripped, joined with `", "`
/// - steps: lines after `조리순서:` that start with `<digits>.`
#[must_use]
pub fn parse_recipe_response(text: &str) -> ParsedRecipe {
    ParsedRecipe {
        name: parse_name(text),
        ingredients: parse_ingredients(text),
        steps: parse_steps(text),
    }
}

fn parse_name(text: &str) -> String {
    let first_line = text.split('\n').next().unwrap_or_default().trim();
    first_line
        .strip_prefix(NAME_PREFIX)
        .map_or(first_line, str::trim)
        .to_owned()
}

fn parse_ingredients(text: &str) -> String {
    let Some(start) = text.find(INGREDIENTS_MARKER) else {
        return String::new();
    };
    let after = &text[start + INGREDIENTS_MARKER.len()..];
    let Some(end) = after.find(STEPS_MARKER) else {
        return String::new();
    };

    after[..end]
        .split(['\n', ','])
        .map(|item| {
            item.trim()
                .trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        })
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_steps(text: &str) -> Vec<String> {
    let Some(start) = text.find(STEPS_MARKER) else {
        return Vec::new();
    };
    text[start + STEPS_MARKER.len()..]
        .split('\n')
        .map(str::trim)
        .filter(|line| is_numbered_step(line))
        .map(str::to_owned)
        .collect()
}

fn is_numbered_step(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}
