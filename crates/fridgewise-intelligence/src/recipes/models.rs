// ABOUTME: Structured recipe extracted from generated recipe text
// ABOUTME: Name, comma-joined ingredient list, and numbered cooking steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use serde::{Deserialize, Serialize};

/// A recipe read from `요리명:` / `재료:` / `조리순서:` sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Dish name from the first line
    pub name: String,
    /// Ingredients joined with `", "`
    pub ingredients: String,
    /// Numbered steps, numbering kept
    pub steps: Vec<String>,
}

impl ParsedRecipe {
    /// Ingredient names as a list
    #[must_use]
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients
            .split(", ")
            .filter(|item| !item.is_empty())
            .collect()
    }
}
