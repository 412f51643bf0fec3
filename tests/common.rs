// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus small standards and food composition tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fridgewise_server`

use axum::Router;
use fridgewise_server::{
    config::ServerConfig,
    models::{FoodCompositionRow, NutritionStandardRow},
    reference_data::ReferenceData,
    resources::ServerResources,
    routes,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Nutrient columns shared by both fixture tables
pub const ENERGY: &str = "에너지(kcal)";
pub const PROTEIN: &str = "단백질(g)";
pub const CALCIUM: &str = "칼슘(mg)";
pub const VITAMIN_C: &str = "비타민 C(mg)";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests are quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn standard_row(band: &str, gender: &str, values: [&str; 4]) -> NutritionStandardRow {
    NutritionStandardRow::new(
        band,
        gender,
        [ENERGY, PROTEIN, CALCIUM, VITAMIN_C].into_iter().zip(values),
    )
}

/// Standards table with five rows; there is no 50-64 band
pub fn standards_fixture() -> Vec<NutritionStandardRow> {
    vec![
        standard_row("15-18세", "남성", ["2700", "65", "900", "100"]),
        standard_row("19-29세", "남성", ["2600", "65", "800", "100"]),
        standard_row("19-29세", "여성", ["2000", "55", "700", "100"]),
        standard_row("30-49세", "여성", ["1900", "50", "700", "100"]),
        standard_row("75세 이상", "여성", ["1500", "50", "800", "100"]),
    ]
}

pub fn food_row(name: &str, values: [&str; 4]) -> FoodCompositionRow {
    FoodCompositionRow::new(
        name,
        [ENERGY, PROTEIN, CALCIUM, VITAMIN_C].into_iter().zip(values),
    )
}

/// Food composition table (per 100 g); 멸치 has no vitamin C measurement
pub fn foods_fixture() -> Vec<FoodCompositionRow> {
    vec![
        food_row("쌀밥", ["143", "2.5", "3", "0"]),
        food_row("두부", ["84", "9.3", "84", "0"]),
        food_row("시금치", ["30", "3.1", "40", "50"]),
        food_row("브로콜리", ["28", "3.7", "39", "98"]),
        food_row("우유", ["65", "3.1", "113", "1"]),
        food_row("멸치", ["302", "48.5", "1290", "-"]),
        food_row("귤", ["39", "0.7", "13", "44"]),
        food_row("배추김치", ["18", "1.5", "47", "10"]),
        food_row("김치찌개", ["33", "2.2", "27", "3"]),
    ]
}

/// Reference data built from the fixtures
pub fn reference_fixture() -> ReferenceData {
    ReferenceData::new(standards_fixture(), foods_fixture())
}

/// Server resources over the fixtures with default configuration
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        reference_fixture(),
    ))
}

/// Full router over the fixtures
pub fn create_test_router() -> Router {
    routes::build_router(create_test_resources())
}

/// Float comparison with a relative tolerance
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
