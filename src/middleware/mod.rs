// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Builds the tower layers applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
