// ABOUTME: Finds refrigerator products expiring within a day window
// ABOUTME: Inclusive window from today, soonest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use chrono::{Days, NaiveDate};
use fridgewise_core::models::InventoryItem;

/// Items expiring in `[today, today + window_days]`, ascending by date.
///
/// Already-expired items are excluded. Items with the same date keep their
/// input order.
#[must_use]
pub fn expiring_products(
    items: &[InventoryItem],
    today: NaiveDate,
    window_days: u32,
) -> Vec<InventoryItem> {
    let horizon = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut expiring: Vec<InventoryItem> = items
        .iter()
        .filter(|item| (today..=horizon).contains(&item.expiration_date))
        .cloned()
        .collect();
    expiring.sort_by_key(|item| item.expiration_date);
    expiring
}

/// Whole days from `today` until the item expires; negative once expired
#[must_use]
pub fn days_until_expiry(item: &InventoryItem, today: NaiveDate) -> i64 {
    (item.expiration_date - today).num_days()
}
