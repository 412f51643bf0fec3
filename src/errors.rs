// ABOUTME: Error types for the server, re-exported from the core crate
// ABOUTME: AppError renders as a JSON error body with the mapped HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Unified error handling, shared with the engine crates

pub use fridgewise_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
    NutritionError,
};
