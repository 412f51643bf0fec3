// ABOUTME: Recipe module turning generated recipe text into structured recipes
// ABOUTME: Section-based parser plus the parsed recipe model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! # Recipes Module
//!
//! Recipe suggestions arrive as plain Korean text in a fixed layout:
//!
//! ```text
//! 요리명: 김치볶음밥
//! 재료:
//! - 밥 1공기
//! - 김치 100g, 대파
//! 조리순서:
//! 1. 김치를 썬다.
//! 2. 밥과 함께 볶는다.
//! ```
//!
//! [`parse_recipe_response`] reads the three sections independently.

/// Core data models for recipes
pub mod models;
/// Section parser
pub mod parser;

pub use models::ParsedRecipe;
pub use parser::parse_recipe_response;
