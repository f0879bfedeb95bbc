//! Storage layer: tabular sources in (CSV, Parquet, NDJSON, XLSX), classified records out (Parquet).

mod error;
pub use error::StoreError;

pub mod export;
pub mod rows;
pub mod source;

pub use export::{records_to_batch, write_parquet};
pub use rows::rows_from_batches;
pub use source::{
    SourceFormat, load_rows, read_csv, read_ndjson, read_parquet, read_source,
    read_xlsx,
};
