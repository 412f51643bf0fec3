// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration: ports, reference table paths, search limits, CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors
//! Configuration module for the Fridgewise server
//!
//! All settings come from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ReferenceDataConfig, ServerConfig};
