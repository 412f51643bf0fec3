// ABOUTME: Main library entry point for the Fridgewise nutrition API server
// ABOUTME: Wires configuration, reference table loading, and HTTP routes around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![deny(unsafe_code)]

//! # Fridgewise Server
//!
//! HTTP surface of the Fridgewise nutrition engine. It serves a companion
//! app for refrigerator inventory and reads two government reference tables:
//! recommended daily intake by age band and gender, and nutrient content per
//! 100 g of common foods.
//!
//! ## Architecture
//!
//! - **Config**: environment-only server configuration
//! - **Reference data**: CSV tables loaded once at startup
//! - **Routes**: thin axum handlers over [`intelligence`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fridgewise_server::config::ServerConfig;
//! use fridgewise_server::reference_data::ReferenceData;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let reference = ReferenceData::load(&config.reference_data)?;
//!     println!("Loaded {} foods", reference.foods().len());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Error types re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Reference table loading
pub mod reference_data;

/// Shared handler state
pub mod resources;

/// HTTP routes
pub mod routes;

pub use fridgewise_core::{constants, models};
pub use fridgewise_intelligence as intelligence;
