// ABOUTME: Shared server state handed to every HTTP handler
// ABOUTME: Holds the configuration and the immutable reference tables behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use crate::config::ServerConfig;
use crate::reference_data::ReferenceData;
use std::sync::Arc;

/// Centralized resource container for dependency injection.
///
/// Everything here is read-only after startup, so handlers share it
/// without locks.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Nutrition standards and food composition tables
    pub reference: Arc<ReferenceData>,
}

impl ServerResources {
    /// Bundle configuration and loaded reference tables
    #[must_use]
    pub fn new(config: ServerConfig, reference: ReferenceData) -> Self {
        Self {
            config: Arc::new(config),
            reference: Arc::new(reference),
        }
    }
}
