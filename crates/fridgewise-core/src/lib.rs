// ABOUTME: Core types and constants for the Fridgewise nutrition platform
// ABOUTME: Foundation crate with error handling, reference-table models, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![deny(unsafe_code)]

//! # Fridgewise Core
//!
//! Foundation crate providing shared types and constants for the Fridgewise
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `NutritionError`
//! - **constants**: Reference-table column names, label sentinels, and policy constants
//! - **models**: Reference rows, intake entries, analysis results, and parsed labels

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (standards, food composition, intake, labels)
pub mod models;

/// Lenient numeric parsing shared by the engine and the CSV loader
pub mod numeric;
