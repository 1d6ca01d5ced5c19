use crate::constants::{EXPECTED_CATEGORY_HEADER, EXPECTED_ITEM_HEADER};
use crate::error::{Result, ShopperError};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// One shopping list row, already lower-cased and trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingEntry {
    pub item: String,
    pub category: String,
}

/// Reads the shopping list from a CSV file
///
/// # Errors
/// Returns error if file cannot be read or CSV format is invalid
pub fn read_shopping_list<P: AsRef<Path>>(path: P) -> Result<Vec<ShoppingEntry>> {
    let file = std::fs::File::open(path)?;
    read_shopping_list_from_reader(file)
}

/// Read CSV with `Item,Category` format.
/// - Blank rows and rows with an empty item or category are skipped
/// - Extra columns are ignored
pub fn read_shopping_list_from_reader<R: Read>(reader: R) -> Result<Vec<ShoppingEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true) // allow additional columns
        .from_reader(reader);

    validate_csv_headers(&mut rdr)?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for header

        if let Some(entry) = parse_record(&rec, row)? {
            entries.push(entry);
        }
    }

    log::debug!("read {} shopping list entries", entries.len());
    Ok(entries)
}

fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| ShopperError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for (index, expected) in [EXPECTED_ITEM_HEADER, EXPECTED_CATEGORY_HEADER]
        .into_iter()
        .enumerate()
    {
        let found = headers.get(index).ok_or_else(|| {
            ShopperError::CsvHeader(format!("Missing '{}' column at index {}", expected, index))
        })?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(ShopperError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                expected, index, found
            )));
        }
    }

    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<ShoppingEntry>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    let item = get_column_value(rec, 0, row)?;
    let category = get_column_value(rec, 1, row)?;

    if item.is_empty() || category.is_empty() {
        log::debug!("row {}: empty item or category, skipped", row);
        return Ok(None);
    }

    Ok(Some(ShoppingEntry {
        item: normalize(item),
        category: normalize(category),
    }))
}

fn get_column_value(record: &StringRecord, column_index: usize, row_number: usize) -> Result<&str> {
    record
        .get(column_index)
        .map(str::trim)
        .ok_or_else(|| ShopperError::CsvRow {
            row: row_number,
            got: record.len(),
        })
}

/// Lower-cases and trims a label so categories match config keys
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
