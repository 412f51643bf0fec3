// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, parse failures and validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fridgewise_server::config::environment::env_keys;
use fridgewise_server::config::{Environment, ServerConfig};
use serial_test::serial;
use std::env;
use std::path::Path;

const ALL_KEYS: [&str; 7] = [
    env_keys::HTTP_PORT,
    env_keys::HOST,
    env_keys::ENVIRONMENT,
    env_keys::NUTRITION_STANDARD_CSV,
    env_keys::NUTRITION_FOOD_CSV,
    env_keys::FOOD_SEARCH_LIMIT,
    env_keys::CORS_ALLOWED_ORIGINS,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8081");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.reference_data.standards_path,
        Path::new("assets/nutrition_standard.csv")
    );
    assert_eq!(
        config.reference_data.foods_path,
        Path::new("assets/nutrition_food.csv")
    );
    assert_eq!(config.food_search_limit, 10);
    assert!(config.allows_any_origin());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_keys::HTTP_PORT, "9090");
    env::set_var(env_keys::HOST, "127.0.0.1");
    env::set_var(env_keys::ENVIRONMENT, "production");
    env::set_var(env_keys::NUTRITION_STANDARD_CSV, "/data/standard.csv");
    env::set_var(env_keys::NUTRITION_FOOD_CSV, "/data/food.csv");
    env::set_var(env_keys::FOOD_SEARCH_LIMIT, "25");
    env::set_var(
        env_keys::CORS_ALLOWED_ORIGINS,
        "https://fridge.example, https://admin.example",
    );

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    assert!(config.environment.is_production());
    assert_eq!(
        config.reference_data.standards_path,
        Path::new("/data/standard.csv")
    );
    assert_eq!(config.food_search_limit, 25);
    assert_eq!(
        config.cors_allowed_origins,
        ["https://fridge.example", "https://admin.example"]
    );
    assert!(!config.allows_any_origin());
    assert!(config.summary().contains("search_limit=25"));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    env::set_var(env_keys::HTTP_PORT, "not-a-port");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_zero_search_limit_is_rejected() {
    clear_env();
    env::set_var(env_keys::FOOD_SEARCH_LIMIT, "0");
    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_blank_origins_are_rejected() {
    clear_env();
    env::set_var(env_keys::CORS_ALLOWED_ORIGINS, " , ");
    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_default_config_validates() {
    assert!(ServerConfig::default().validate().is_ok());
}
