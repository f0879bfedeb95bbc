//! Operator session: the append-only record collection and per-record
//! reply inputs.
//!
//! Records are never removed; only their status changes. Replies are not
//! stored. Each render takes a snapshot of the record's current fields and
//! passes it to the pure template engine.

use std::collections::HashMap;
use std::ops::Range;

use chrono::{DateTime, Utc};
use servicedesk_core::{
    Category, ClassifiedRecord, ExtraField, ExtraFields, IngestConfig, InputRow, RecordStatus,
};
use thiserror::Error;
use tracing::info;

use crate::pipeline::ingest_all;
use crate::templates::render;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no record at index {index} (session holds {len})")]
    NoSuchRecord { index: usize, len: usize },
}

/// A tabular source that contributed records to the session.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// What an operator sees when composing a reply for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPreview {
    pub index: usize,
    pub category: Category,
    pub status: RecordStatus,
    /// Fields the category asks for, with their current values.
    pub prompts: Vec<(ExtraField, String)>,
    pub text: String,
}

/// Record counts by category and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Known categories in priority order, then upstream-only labels in order of first appearance.
    pub by_category: Vec<(Category, usize)>,
}

#[derive(Debug)]
pub struct Session {
    config: IngestConfig,
    records: Vec<ClassifiedRecord>,
    extra: HashMap<usize, ExtraFields>,
    sources: Vec<SourceFile>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

impl Session {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            extra: HashMap::new(),
            sources: Vec::new(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    // ── Ingestion ──

    /// Classify a parsed batch and append it. Returns the indices assigned.
    pub fn ingest_batch(&mut self, source_name: impl Into<String>, rows: &[InputRow]) -> Range<usize> {
        let start = self.records.len();
        self.records.extend(ingest_all(rows, &self.config));
        let source = SourceFile {
            name: source_name.into(),
            rows: rows.len(),
            loaded_at: Utc::now(),
        };
        info!(source = %source.name, rows = source.rows, "ingested source");
        self.sources.push(source);
        start..self.records.len()
    }

    // ── Accessors ──

    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Result<&ClassifiedRecord, SessionError> {
        self.records.get(index).ok_or(SessionError::NoSuchRecord {
            index,
            len: self.records.len(),
        })
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Status ──

    /// Close a record. Returns `true` if it was open, `false` if already closed.
    pub fn close(&mut self, index: usize) -> Result<bool, SessionError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(SessionError::NoSuchRecord { index, len })?;
        let changed = record.close();
        if changed {
            info!(index, "record closed");
        }
        Ok(changed)
    }

    // ── Reply inputs ──

    pub fn set_field(
        &mut self,
        index: usize,
        field: ExtraField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.record(index)?;
        self.extra.entry(index).or_default().set(field, value);
        Ok(())
    }

    /// Snapshot of the record's reply inputs (empty if none were set).
    pub fn extra_fields(&self, index: usize) -> Result<ExtraFields, SessionError> {
        self.record(index)?;
        Ok(self.extra.get(&index).cloned().unwrap_or_default())
    }

    /// Render the reply for a record from its current inputs.
    pub fn render_reply(&self, index: usize) -> Result<String, SessionError> {
        let record = self.record(index)?;
        let fields = self.extra_fields(index)?;
        Ok(render(&record.category, &fields))
    }

    pub fn reply_preview(&self, index: usize) -> Result<ReplyPreview, SessionError> {
        let record = self.record(index)?;
        let fields = self.extra_fields(index)?;
        let prompts = record
            .category
            .reply_fields()
            .iter()
            .map(|f| (*f, fields.get(f.key()).to_string()))
            .collect();
        Ok(ReplyPreview {
            index,
            category: record.category.clone(),
            status: record.status,
            prompts,
            text: render(&record.category, &fields),
        })
    }

    // ── Reporting ──

    pub fn summary(&self) -> SessionSummary {
        let mut by_category: Vec<(Category, usize)> =
            Category::KNOWN.into_iter().map(|c| (c, 0)).collect();
        let mut open = 0;

        for record in &self.records {
            if record.is_open() {
                open += 1;
            }
            match by_category.iter_mut().find(|(c, _)| c == &record.category) {
                Some((_, n)) => *n += 1,
                None => by_category.push((record.category.clone(), 1)),
            }
        }
        by_category.retain(|(_, n)| *n > 0);

        SessionSummary {
            total: self.records.len(),
            open,
            closed: self.records.len() - open,
            by_category,
        }
    }
}
