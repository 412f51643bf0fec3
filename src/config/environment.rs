// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, reference table locations, and request limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Environment-based configuration management

use crate::constants::policy::DEFAULT_FOOD_SEARCH_LIMIT;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Environment variable names
pub mod env_keys {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Path of the nutrition standards CSV
    pub const NUTRITION_STANDARD_CSV: &str = "NUTRITION_STANDARD_CSV";
    /// Path of the food composition CSV
    pub const NUTRITION_FOOD_CSV: &str = "NUTRITION_FOOD_CSV";
    /// Maximum number of food search hits
    pub const FOOD_SEARCH_LIMIT: &str = "FOOD_SEARCH_LIMIT";
    /// Comma-separated allowed CORS origins, `*` for any
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Defaults applied when a variable is unset
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default nutrition standards CSV
    pub const NUTRITION_STANDARD_CSV: &str = "assets/nutrition_standard.csv";
    /// Default food composition CSV
    pub const NUTRITION_FOOD_CSV: &str = "assets/nutrition_food.csv";
    /// Default CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the two reference tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceDataConfig {
    /// Nutrition standards (RDA) CSV
    pub standards_path: PathBuf,
    /// Food composition CSV
    pub foods_path: PathBuf,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            standards_path: PathBuf::from(defaults::NUTRITION_STANDARD_CSV),
            foods_path: PathBuf::from(defaults::NUTRITION_FOOD_CSV),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Reference table locations
    pub reference_data: ReferenceDataConfig,
    /// Maximum food search hits
    pub food_search_limit: usize,
    /// Allowed CORS origins; `*` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: defaults::HTTP_PORT,
            environment: Environment::Development,
            reference_data: ReferenceDataConfig::default(),
            food_search_limit: DEFAULT_FOOD_SEARCH_LIMIT,
            cors_allowed_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_keys::HOST, defaults::HOST)
                .parse()
                .context("Invalid HOST value")?,
            http_port: env_var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            reference_data: ReferenceDataConfig {
                standards_path: PathBuf::from(env_var_or(
                    env_keys::NUTRITION_STANDARD_CSV,
                    defaults::NUTRITION_STANDARD_CSV,
                )),
                foods_path: PathBuf::from(env_var_or(
                    env_keys::NUTRITION_FOOD_CSV,
                    defaults::NUTRITION_FOOD_CSV,
                )),
            },
            food_search_limit: env_var_or(
                env_keys::FOOD_SEARCH_LIMIT,
                &DEFAULT_FOOD_SEARCH_LIMIT.to_string(),
            )
            .parse()
            .context("Invalid FOOD_SEARCH_LIMIT value")?,
            cors_allowed_origins: parse_origins(&env_var_or(
                env_keys::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the food search limit is zero or no CORS origin is configured
    pub fn validate(&self) -> Result<()> {
        if self.food_search_limit == 0 {
            bail!("FOOD_SEARCH_LIMIT must be at least 1");
        }
        if self.cors_allowed_origins.is_empty() {
            bail!("CORS_ALLOWED_ORIGINS must name at least one origin or '*'");
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Whether any origin may call the API
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} addr={} standards={} foods={} search_limit={}",
            self.environment,
            self.socket_addr(),
            self.reference_data.standards_path.display(),
            self.reference_data.foods_path.display(),
            self.food_search_limit,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
