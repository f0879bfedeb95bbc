//! Classified records to Arrow and Parquet.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt64Array};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use servicedesk_core::ClassifiedRecord;
use servicedesk_core::schema::records::classified_record_schema;
use tracing::info;

use crate::StoreError;

/// Build a RecordBatch with [`classified_record_schema`].
///
/// `index` is the record's position in the session.
pub fn records_to_batch(records: &[ClassifiedRecord]) -> Result<RecordBatch, StoreError> {
    let schema = Arc::new(classified_record_schema());

    let index = UInt64Array::from_iter_values(0..records.len() as u64);
    let source_text: StringArray = records.iter().map(|r| Some(r.source_text.as_str())).collect();
    let category: StringArray = records.iter().map(|r| Some(r.category.label())).collect();
    let status: StringArray = records.iter().map(|r| Some(r.status.as_str())).collect();
    let source_status: StringArray =
        records.iter().map(|r| Some(r.source_status.as_str())).collect();
    let request_number: StringArray = records
        .iter()
        .map(|r| r.request_number.as_deref())
        .collect();
    let reference_number: StringArray = records
        .iter()
        .map(|r| r.reference_number.as_deref())
        .collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(index),
        Arc::new(source_text),
        Arc::new(category),
        Arc::new(status),
        Arc::new(source_status),
        Arc::new(request_number),
        Arc::new(reference_number),
    ];
    Ok(RecordBatch::try_new(schema, columns)?)
}

/// Write one batch to a Parquet file, replacing any existing file.
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<(), StoreError> {
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    info!(path = %path.display(), rows = batch.num_rows(), "wrote parquet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::read_parquet;
    use arrow::array::Array;
    use servicedesk_core::{Category, RecordStatus};
    use tempfile::TempDir;

    fn records() -> Vec<ClassifiedRecord> {
        vec![
            ClassifiedRecord {
                source_text: "يوجد عطل خطير".into(),
                category: Category::Incident,
                status: RecordStatus::Open,
                source_status: "New".into(),
                request_number: Some("1122334".into()),
                reference_number: None,
            },
            ClassifiedRecord {
                source_text: "billing".into(),
                category: Category::Other("Billing Dispute".into()),
                status: RecordStatus::Closed,
                source_status: "Classified".into(),
                request_number: None,
                reference_number: Some("44556677".into()),
            },
        ]
    }

    fn col<'a>(batch: &'a RecordBatch, name: &str) -> &'a StringArray {
        batch
            .column_by_name(name)
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap()
    }

    #[test]
    fn batch_columns_follow_records() {
        let batch = records_to_batch(&records()).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(col(&batch, "category").value(0), "Incident - بلاغ");
        assert_eq!(col(&batch, "category").value(1), "Billing Dispute");
        assert_eq!(col(&batch, "status").value(1), "Closed");
        assert_eq!(col(&batch, "request_number").value(0), "1122334");
        assert!(col(&batch, "request_number").is_null(1));
        assert!(col(&batch, "reference_number").is_null(0));
    }

    #[test]
    fn empty_records_make_empty_batch() {
        let batch = records_to_batch(&[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 7);
    }

    #[test]
    fn parquet_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.parquet");
        let batch = records_to_batch(&records()).unwrap();
        write_parquet(&path, &batch).unwrap();

        let read = read_parquet(&path).unwrap();
        let total: usize = read.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total, 2);
        assert_eq!(col(&read[0], "source_text").value(0), "يوجد عطل خطير");
        assert_eq!(col(&read[0], "reference_number").value(1), "44556677");
    }
}
