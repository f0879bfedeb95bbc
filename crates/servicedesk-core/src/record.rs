//! Input rows and the classified records produced from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One row of the upstream tabular source.
///
/// Absent columns are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Resolution Response", default)]
    pub resolution_response: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Case Type", default)]
    pub case_type: String,
}

/// Lifecycle of a record in the session. `Open -> Closed` is the only transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Open,
    Closed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record after classification and identifier extraction.
///
/// Everything except `status` is fixed at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub source_text: String,
    pub category: Category,
    pub status: RecordStatus,
    /// Upstream `Status` value as read from the source row.
    pub source_status: String,
    /// Case/request number found in the resolution response.
    pub request_number: Option<String>,
    /// Account/bill number found in the description.
    pub reference_number: Option<String>,
}

impl ClassifiedRecord {
    /// Mark the record closed. Returns `true` if this call changed the status.
    pub fn close(&mut self) -> bool {
        let was_open = self.status == RecordStatus::Open;
        self.status = RecordStatus::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.status == RecordStatus::Open
    }
}
