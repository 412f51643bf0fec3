// ABOUTME: Tests for one-month consumption analysis and the expiry window
// ABOUTME: Covers window edges, top-product ranking, percentage rounding and date sorting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use common::assert_close;
use fridgewise_server::constants::policy::EXPIRY_WINDOW_DAYS;
use fridgewise_server::intelligence::inventory::days_until_expiry;
use fridgewise_server::intelligence::{analyze_consumption, expiring_products};
use fridgewise_server::models::{ConsumptionRecord, InventoryItem};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn record(usage_date: DateTime<Utc>, product_name: &str, quantity_used: u32) -> ConsumptionRecord {
    ConsumptionRecord {
        usage_date,
        product_name: product_name.to_owned(),
        quantity_used,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn item(name: &str, expiration_date: NaiveDate) -> InventoryItem {
    InventoryItem {
        product_name: name.to_owned(),
        expiration_date,
    }
}

fn march_records() -> Vec<ConsumptionRecord> {
    vec![
        record(at(2026, 2, 14, 23, 59), "우유", 10),
        record(at(2026, 2, 15, 0, 0), "사과", 3),
        record(at(2026, 2, 20, 8, 30), "우유", 4),
        record(at(2026, 3, 1, 9, 0), "계란", 2),
        record(at(2026, 3, 2, 18, 0), "요구르트", 2),
        record(at(2026, 3, 5, 12, 0), "사과", 2),
        record(at(2026, 3, 10, 7, 0), "버터", 2),
        record(at(2026, 3, 12, 21, 0), "치즈", 1),
    ]
}

// ============================================================================
// Consumption
// ============================================================================

#[test]
fn test_consumption_window_and_totals() {
    common::init_test_logging();
    let analysis = analyze_consumption(&march_records(), at(2026, 3, 15, 12, 0));

    assert_eq!(analysis.total_items, 7);
    assert_eq!(analysis.total_quantity, 16);
}

#[test]
fn test_top_products_ranked_with_stable_ties() {
    let analysis = analyze_consumption(&march_records(), at(2026, 3, 15, 12, 0));

    let ranked: Vec<(&str, u64)> = analysis
        .product_consumption
        .iter()
        .map(|(name, quantity)| (name, *quantity))
        .collect();
    assert_eq!(
        ranked,
        [("사과", 5), ("우유", 4), ("계란", 2), ("요구르트", 2), ("버터", 2)]
    );
}

#[test]
fn test_percentages_are_shares_of_top_products() {
    let analysis = analyze_consumption(&march_records(), at(2026, 3, 15, 12, 0));
    let percentages = &analysis.consumption_percentages;

    assert_close(*percentages.get("사과").unwrap(), 33.33);
    assert_close(*percentages.get("우유").unwrap(), 26.67);
    assert_close(*percentages.get("버터").unwrap(), 13.33);
    assert!(percentages.get("치즈").is_none());
}

#[test]
fn test_window_uses_calendar_month() {
    // One month before March 31 clamps to the end of February
    let records = vec![
        record(at(2026, 2, 27, 23, 0), "두부", 1),
        record(at(2026, 2, 28, 0, 0), "두부", 1),
    ];
    let analysis = analyze_consumption(&records, at(2026, 3, 31, 10, 0));
    assert_eq!(analysis.total_items, 1);
}

#[test]
fn test_no_records_in_window() {
    let records = vec![record(at(2025, 12, 1, 0, 0), "우유", 3)];
    let analysis = analyze_consumption(&records, at(2026, 3, 15, 12, 0));

    assert_eq!(analysis.total_items, 0);
    assert_eq!(analysis.total_quantity, 0);
    assert!(analysis.product_consumption.is_empty());
    assert!(analysis.consumption_percentages.is_empty());
}

#[test]
fn test_zero_quantities_give_zero_percent() {
    let records = vec![record(at(2026, 3, 10, 0, 0), "물", 0)];
    let analysis = analyze_consumption(&records, at(2026, 3, 15, 12, 0));

    assert_eq!(analysis.total_items, 1);
    assert_close(*analysis.consumption_percentages.get("물").unwrap(), 0.0);
}

// ============================================================================
// Expiry
// ============================================================================

fn pantry() -> Vec<InventoryItem> {
    vec![
        item("A", date(2026, 2, 28)),
        item("B", date(2026, 3, 29)),
        item("C", date(2026, 3, 1)),
        item("D", date(2026, 3, 30)),
        item("E", date(2026, 3, 10)),
    ]
}

#[test]
fn test_expiring_window_is_inclusive_and_sorted() {
    let today = date(2026, 3, 1);
    let expiring = expiring_products(&pantry(), today, EXPIRY_WINDOW_DAYS);

    let names: Vec<&str> = expiring.iter().map(|item| item.product_name.as_str()).collect();
    assert_eq!(names, ["C", "E", "B"]);
}

#[test]
fn test_zero_day_window_is_today_only() {
    let expiring = expiring_products(&pantry(), date(2026, 3, 1), 0);
    assert_eq!(expiring, vec![item("C", date(2026, 3, 1))]);
}

#[test]
fn test_days_until_expiry() {
    let today = date(2026, 3, 1);
    assert_eq!(days_until_expiry(&item("B", date(2026, 3, 29)), today), 28);
    assert_eq!(days_until_expiry(&item("A", date(2026, 2, 28)), today), -1);
}
