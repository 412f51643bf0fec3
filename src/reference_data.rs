// ABOUTME: Loads the nutrition standards and food composition CSV tables at startup
// ABOUTME: Separates identity columns from nutrient columns and keeps cells as loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Reference table loading.
//!
//! Both tables are CSV exports with a header row. The standards table is
//! keyed by the `연령` and `성별` columns, the composition table by `식품명`;
//! every other column is a nutrient and is kept verbatim, in header order.
//! A UTF-8 byte order mark on the first header is ignored.

use crate::config::ReferenceDataConfig;
use crate::constants::columns;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{FoodCompositionRow, NutritionStandardRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Both reference tables, immutable after loading
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    standards: Vec<NutritionStandardRow>,
    foods: Vec<FoodCompositionRow>,
}

impl ReferenceData {
    /// Wrap already-loaded tables
    #[must_use]
    pub const fn new(standards: Vec<NutritionStandardRow>, foods: Vec<FoodCompositionRow>) -> Self {
        Self { standards, foods }
    }

    /// Load both tables from the configured paths
    ///
    /// # Errors
    ///
    /// Returns a storage error if either file cannot be opened or parsed
    pub fn load(config: &ReferenceDataConfig) -> AppResult<Self> {
        let standards = load_standards_file(&config.standards_path)?;
        let foods = load_foods_file(&config.foods_path)?;
        Ok(Self::new(standards, foods))
    }

    /// Nutrition standards rows, in file order
    #[must_use]
    pub fn standards(&self) -> &[NutritionStandardRow] {
        &self.standards
    }

    /// Food composition rows, in file order
    #[must_use]
    pub fn foods(&self) -> &[FoodCompositionRow] {
        &self.foods
    }
}

/// Load the standards table from a file
///
/// # Errors
///
/// Returns a storage error if the file cannot be opened or parsed
pub fn load_standards_file(path: &Path) -> AppResult<Vec<NutritionStandardRow>> {
    let rows = load_standards(open(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "Loaded nutrition standards");
    Ok(rows)
}

/// Load the food composition table from a file
///
/// # Errors
///
/// Returns a storage error if the file cannot be opened or parsed
pub fn load_foods_file(path: &Path) -> AppResult<Vec<FoodCompositionRow>> {
    let rows = load_foods(open(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "Loaded food composition table");
    Ok(rows)
}

/// Parse a standards table
///
/// # Errors
///
/// Returns an error if the CSV is malformed or lacks the `연령`/`성별` columns
pub fn load_standards<R: Read>(reader: R) -> AppResult<Vec<NutritionStandardRow>> {
    let table = Table::read(reader)?;
    let age_column = table.require_column(columns::AGE_BAND)?;
    let gender_column = table.require_column(columns::GENDER)?;

    Ok(table
        .records
        .iter()
        .map(|record| {
            NutritionStandardRow::new(
                cell(record, age_column),
                cell(record, gender_column),
                table.nutrient_cells(record, &[age_column, gender_column]),
            )
        })
        .collect())
}

/// Parse a food composition table
///
/// # Errors
///
/// Returns an error if the CSV is malformed or lacks the `식품명` column
pub fn load_foods<R: Read>(reader: R) -> AppResult<Vec<FoodCompositionRow>> {
    let table = Table::read(reader)?;
    let name_column = table.require_column(columns::FOOD_NAME)?;

    Ok(table
        .records
        .iter()
        .map(|record| {
            FoodCompositionRow::new(
                cell(record, name_column),
                table.nutrient_cells(record, &[name_column]),
            )
        })
        .collect())
}

struct Table {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl Table {
    fn read<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .enumerate()
            .map(|(index, header)| {
                if index == 0 {
                    header.trim_start_matches(BYTE_ORDER_MARK).trim().to_owned()
                } else {
                    header.to_owned()
                }
            })
            .collect();

        let records = csv_reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_error)?;

        Ok(Self { headers, records })
    }

    fn require_column(&self, name: &str) -> AppResult<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("Reference table is missing the '{name}' column"),
                )
            })
    }

    fn nutrient_cells<'a>(
        &'a self,
        record: &'a StringRecord,
        identity_columns: &'a [usize],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .enumerate()
            .filter(move |(index, _)| !identity_columns.contains(index))
            .map(move |(index, header)| (header.as_str(), cell(record, index)))
    }
}

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|error| {
        AppError::storage(format!(
            "Cannot open reference table {}: {error}",
            path.display()
        ))
        .with_source(error)
    })
}

fn csv_error(error: csv::Error) -> AppError {
    AppError::storage(format!("Malformed reference table: {error}")).with_source(error)
}
