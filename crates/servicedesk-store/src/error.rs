use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("source file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("unsupported source format: {0}")]
    UnsupportedFormat(std::path::PathBuf),

    #[error("workbook has no worksheets: {0}")]
    NoWorksheet(std::path::PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),
}
