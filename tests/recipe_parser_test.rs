// ABOUTME: Tests for parsing structured recipe text into name, ingredients and steps
// ABOUTME: Covers the happy path and texts missing one or more sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fridgewise_server::intelligence::{parse_recipe_response, ParsedRecipe};

const RECIPE: &str = "요리명: 두부김치
재료:
- 두부 1모
- 김치 200g, 돼지고기 100g

조리순서:
1. 두부를 끓는 물에 데친다.
2. 김치와 돼지고기를 볶는다.
참고: 김치가 시면 설탕을 조금 넣는다.
10. 접시에 담는다.";

#[test]
fn test_parse_full_recipe() {
    let recipe = parse_recipe_response(RECIPE);

    assert_eq!(recipe.name, "두부김치");
    assert_eq!(recipe.ingredients, "두부 1모, 김치 200g, 돼지고기 100g");
    assert_eq!(
        recipe.ingredient_list(),
        ["두부 1모", "김치 200g", "돼지고기 100g"]
    );
    assert_eq!(
        recipe.steps,
        [
            "1. 두부를 끓는 물에 데친다.",
            "2. 김치와 돼지고기를 볶는다.",
            "10. 접시에 담는다.",
        ]
    );
}

#[test]
fn test_name_without_prefix_is_first_line() {
    let recipe = parse_recipe_response("  된장찌개\n재료: 된장, 두부\n조리순서:\n1. 끓인다.");
    assert_eq!(recipe.name, "된장찌개");
    assert_eq!(recipe.ingredients, "된장, 두부");
    assert_eq!(recipe.steps, ["1. 끓인다."]);
}

#[test]
fn test_leading_blank_line_leaves_name_empty() {
    let recipe = parse_recipe_response(&format!("\n{RECIPE}"));
    assert_eq!(recipe.name, "");
    assert_eq!(recipe.ingredients, "두부 1모, 김치 200g, 돼지고기 100g");
    assert_eq!(recipe.steps.len(), 3);

    let recipe = parse_recipe_response("  \r\n요리명: 잡채\n재료: 당면\n조리순서:\n1. 삶는다.");
    assert_eq!(recipe.name, "");
    assert_eq!(recipe.steps, ["1. 삶는다."]);
}

#[test]
fn test_missing_steps_section() {
    let recipe = parse_recipe_response("요리명: 계란말이\n재료: 계란, 파");
    assert_eq!(recipe.name, "계란말이");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
}

#[test]
fn test_unnumbered_lines_are_not_steps() {
    let recipe = parse_recipe_response("요리명: 밥\n재료: 쌀\n조리순서:\n- 씻는다\n가. 안친다\n1 끓인다");
    assert!(recipe.steps.is_empty());
}

#[test]
fn test_empty_text() {
    assert_eq!(parse_recipe_response(""), ParsedRecipe::default());
    assert_eq!(parse_recipe_response("   \n"), ParsedRecipe::default());
}
