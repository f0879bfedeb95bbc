/// Arrow schema definitions for classified record exports.
pub mod records {
    use arrow::datatypes::{DataType, Field, Schema};

    /// Schema for the classified record table.
    pub fn classified_record_schema() -> Schema {
        Schema::new(vec![
            Field::new("index", DataType::UInt64, false),
            Field::new("source_text", DataType::Utf8, false),
            Field::new("category", DataType::Utf8, false),
            Field::new("status", DataType::Utf8, false),
            Field::new("source_status", DataType::Utf8, false),
            Field::new("request_number", DataType::Utf8, true),
            Field::new("reference_number", DataType::Utf8, true),
        ])
    }
}
