//! Tabular source readers.
//!
//! Every reader returns the whole file as Arrow RecordBatches or fails; a
//! failed read never yields a partial batch list. CSV and NDJSON columns are
//! read as Utf8 so identifiers keep their leading zeros and digit runs. Short
//! CSV rows are padded with nulls. XLSX sources read the first worksheet,
//! header row first, every cell formatted as text.

use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use calamine::{Data, Reader, open_workbook_auto};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use servicedesk_core::{IngestConfig, InputRow};
use tracing::info;

use crate::StoreError;
use crate::rows::rows_from_batches;

/// File formats accepted as record sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Parquet,
    Ndjson,
    Xlsx,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            "json" | "ndjson" | "jsonl" => Some(Self::Ndjson),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(Self::Xlsx),
            _ => None,
        }
    }
}

/// Read any supported source into RecordBatches.
pub fn read_source(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| StoreError::UnsupportedFormat(path.to_path_buf()))?;
    let batches = match format {
        SourceFormat::Csv => read_csv(path)?,
        SourceFormat::Parquet => read_parquet(path)?,
        SourceFormat::Ndjson => read_ndjson(path)?,
        SourceFormat::Xlsx => read_xlsx(path)?,
    };
    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    info!(path = %path.display(), ?format, rows, "read source");
    Ok(batches)
}

/// Read a source file and map it to input rows.
pub fn load_rows(path: &Path, config: &IngestConfig) -> Result<Vec<InputRow>, StoreError> {
    let batches = read_source(path)?;
    rows_from_batches(&batches, config)
}

/// Read a CSV file with a header row. All columns are read as Utf8; rows
/// with missing trailing cells read those cells as null.
pub fn read_csv(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    let mut file = File::open(path)?;
    let (inferred, _) = arrow::csv::reader::Format::default()
        .with_header(true)
        .with_truncated_rows(true)
        .infer_schema(&mut file, None)?;
    file.rewind()?;

    let reader = arrow::csv::ReaderBuilder::new(utf8_schema(&inferred))
        .with_header(true)
        .with_truncated_rows(true)
        .build(file)?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok(batches?)
}

/// Read a Parquet file into Arrow RecordBatches.
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok(batches?)
}

/// Read newline-delimited JSON objects. Scalar values are coerced to Utf8.
pub fn read_ndjson(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    let mut reader = BufReader::new(File::open(path)?);
    let (inferred, _) = arrow::json::reader::infer_json_schema_from_seekable(&mut reader, None)?;
    reader.rewind()?;

    let reader = arrow::json::ReaderBuilder::new(utf8_schema(&inferred))
        .with_coerce_primitive(true)
        .build(reader)?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok(batches?)
}

/// Read the first worksheet of a spreadsheet into a single Utf8 batch.
///
/// The first row names the columns. Empty cells are null; numbers and dates
/// use calamine's text rendering. A sheet with no cells yields no batches.
pub fn read_xlsx(path: &Path) -> Result<Vec<RecordBatch>, StoreError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StoreError::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); header.len()];
    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(match cell {
                Data::Empty => None,
                other => Some(other.to_string()),
            });
        }
    }

    let fields: Vec<Field> = header
        .iter()
        .map(|h| Field::new(h.to_string(), DataType::Utf8, true))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .into_iter()
        .map(|c| Arc::new(StringArray::from(c)) as ArrayRef)
        .collect();
    Ok(vec![RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?])
}

/// Same column names, every column nullable Utf8.
fn utf8_schema(inferred: &Schema) -> Arc<Schema> {
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();
    Arc::new(Schema::new(fields))
}
