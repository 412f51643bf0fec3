// ABOUTME: Tests for food name search over the composition table
// ABOUTME: Covers substring matching, case folding, limits and numeric coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, food_row, foods_fixture, CALCIUM, VITAMIN_C};
use fridgewise_server::intelligence::search_foods;

#[test]
fn test_substring_match_in_table_order() {
    let results = search_foods("김치", &foods_fixture(), 10);
    let names: Vec<&str> = results.iter().map(|food| food.name.as_str()).collect();
    assert_eq!(names, ["배추김치", "김치찌개"]);
}

#[test]
fn test_limit_caps_results() {
    let results = search_foods("", &foods_fixture(), 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name, "쌀밥");
}

#[test]
fn test_no_match_is_empty() {
    assert!(search_foods("피자", &foods_fixture(), 10).is_empty());
}

#[test]
fn test_case_insensitive_match() {
    let foods = vec![
        food_row("Greek Yogurt", ["97", "9", "100", "0"]),
        food_row("우유", ["65", "3.1", "113", "1"]),
    ];
    let results = search_foods("YOGURT", &foods, 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Greek Yogurt");
}

#[test]
fn test_non_numeric_cells_become_zero() {
    let results = search_foods("멸치", &foods_fixture(), 10);
    let anchovy = &results[0];

    assert_close(*anchovy.nutrients.get(CALCIUM).unwrap(), 1290.0);
    assert_close(*anchovy.nutrients.get(VITAMIN_C).unwrap(), 0.0);
    assert_eq!(anchovy.nutrients.len(), 4);
}
