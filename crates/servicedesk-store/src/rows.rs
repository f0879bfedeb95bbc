//! Map Arrow RecordBatches onto [`InputRow`]s.
//!
//! Columns are looked up by the names in [`IngestConfig`]. A missing column
//! or a null cell reads as an empty string; non-string columns are formatted
//! with Arrow's display rules.

use arrow::array::{Array, ArrayRef, LargeStringArray, StringArray, StringViewArray};
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use servicedesk_core::{IngestConfig, InputRow};

use crate::StoreError;

/// Build input rows from batches, preserving row order across batches.
pub fn rows_from_batches(
    batches: &[RecordBatch],
    config: &IngestConfig,
) -> Result<Vec<InputRow>, StoreError> {
    let total: usize = batches.iter().map(|b| b.num_rows()).sum();
    let mut rows = Vec::with_capacity(total);

    for batch in batches {
        let description = find_column(batch, &config.description_column);
        let resolution = find_column(batch, &config.resolution_column);
        let status = find_column(batch, &config.status_column);
        let case_type = find_column(batch, &config.case_type_column);

        for row in 0..batch.num_rows() {
            rows.push(InputRow {
                description: cell_text(description, row)?,
                resolution_response: cell_text(resolution, row)?,
                status: cell_text(status, row)?,
                case_type: cell_text(case_type, row)?,
            });
        }
    }

    Ok(rows)
}

// ── Arrow extraction helpers ──

/// Find a column by name, tolerating a UTF-8 BOM and padding in the header
/// (common in spreadsheet CSV exports).
fn find_column<'a>(batch: &'a RecordBatch, name: &str) -> Option<&'a ArrayRef> {
    if let Some(col) = batch.column_by_name(name) {
        return Some(col);
    }
    let idx = batch
        .schema()
        .fields()
        .iter()
        .position(|f| f.name().trim_start_matches('\u{feff}').trim() == name)?;
    Some(batch.column(idx))
}

/// Text of a cell, or `""` for a missing column or null value.
fn cell_text(col: Option<&ArrayRef>, row: usize) -> Result<String, StoreError> {
    let Some(col) = col else {
        return Ok(String::new());
    };
    if col.is_null(row) {
        return Ok(String::new());
    }
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        return Ok(arr.value(row).to_string());
    }
    if let Some(arr) = col.as_any().downcast_ref::<LargeStringArray>() {
        return Ok(arr.value(row).to_string());
    }
    if let Some(arr) = col.as_any().downcast_ref::<StringViewArray>() {
        return Ok(arr.value(row).to_string());
    }
    Ok(array_value_to_string(col.as_ref(), row)?)
}
