// ABOUTME: Application-wide constants for reference tables, labels, and analysis policy
// ABOUTME: Column names, unknown-label sentinels, and fixed thresholds live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Constants organized by domain.

/// Column names used by the flat reference tables
pub mod columns {
    /// Age band identity column of the standards table
    pub const AGE_BAND: &str = "연령";
    /// Gender identity column of the standards table
    pub const GENDER: &str = "성별";
    /// Food name column of the food composition table
    pub const FOOD_NAME: &str = "식품명";
}

/// Gender labels as stored in the standards table
pub mod gender_labels {
    /// Male label
    pub const MALE: &str = "남성";
    /// Female label
    pub const FEMALE: &str = "여성";
    /// Tokens (lower-cased) that normalize to male; everything else is female
    pub const MALE_TOKENS: [&str; 4] = ["남성", "남자", "male", "m"];
}

/// Sentinels used by the certification data source for missing text
pub mod label_sentinels {
    /// Nutrient text values meaning "unknown" (compared after trimming)
    pub const UNKNOWN_NUTRIENTS: [&str; 4] = ["알수없음", "알 수 없음", "정보 없음", "."];
    /// Allergy text values meaning "unknown" (compared after trimming)
    pub const UNKNOWN_ALLERGY: [&str; 2] = ["알수없음", "."];
    /// Allergy text meaning the product has no allergens
    pub const NO_ALLERGENS: &str = "없음";
    /// Trailing marker appended to allergen lists ("contains")
    pub const CONTAINS_SUFFIX: &str = "함유";
}

/// Fixed analysis policy
pub mod policy {
    /// Nutrients below this percentage of the standard trigger recommendations
    pub const DEFICIENCY_THRESHOLD_PERCENT: f64 = 90.0;
    /// Maximum recommended foods per deficient nutrient
    pub const MAX_RECOMMENDATIONS_PER_NUTRIENT: usize = 3;
    /// Youngest age covered by the standards table
    pub const MINIMUM_STANDARD_AGE: u32 = 15;
    /// Default number of food search results
    pub const DEFAULT_FOOD_SEARCH_LIMIT: usize = 10;
    /// Number of products reported by the consumption analysis
    pub const TOP_CONSUMED_PRODUCTS: usize = 5;
    /// Default expiry look-ahead window in days
    pub const EXPIRY_WINDOW_DAYS: u32 = 28;
}

/// Service identity used in logs
pub mod service_names {
    /// Server binary service name
    pub const FRIDGEWISE_SERVER: &str = "fridgewise-server";
}
