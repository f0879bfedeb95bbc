//! Triage engine: keyword classifier, identifier extractor, reply templates,
//! and the session that holds classified records.

pub mod classifier;
pub mod extractor;
pub mod pipeline;
pub mod session;
pub mod templates;

pub use classifier::{RULES, Rule, classify, matched_rule};
pub use extractor::{Identifiers, extract_identifiers, first_identifier};
pub use pipeline::{ingest, ingest_all};
pub use session::{ReplyPreview, Session, SessionError, SessionSummary, SourceFile};
pub use templates::{GENERIC_ACKNOWLEDGEMENT, placeholders, render, template_for};
