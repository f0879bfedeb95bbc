pub mod category;
pub mod config;
pub mod fields;
pub mod record;
pub mod schema;

pub use category::Category;
pub use config::{ConfigError, IngestConfig};
pub use fields::{ExtraField, ExtraFields};
pub use record::{ClassifiedRecord, InputRow, RecordStatus};
pub use schema::records;
