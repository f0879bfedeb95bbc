//! Row ingestion: classification source policy plus identifier extraction.

use servicedesk_core::{Category, ClassifiedRecord, IngestConfig, InputRow, RecordStatus};
use tracing::debug;

use crate::classifier::classify;
use crate::extractor::extract_identifiers;

/// Turn one input row into a classified record.
///
/// Rows whose status equals the configured sentinel keep their upstream
/// `Case Type`; all others go through the keyword classifier. Identifiers
/// are extracted either way. Never fails.
pub fn ingest(row: &InputRow, config: &IngestConfig) -> ClassifiedRecord {
    let trusted = row.status == config.sentinel_status;
    let category = if trusted {
        Category::from_label(&row.case_type)
    } else {
        classify(&row.description)
    };
    let ids = extract_identifiers(&row.description, &row.resolution_response);

    debug!(
        category = %category,
        trusted,
        request_number = ids.request_number.as_deref().unwrap_or(""),
        reference_number = ids.reference_number.as_deref().unwrap_or(""),
        "ingested row"
    );

    ClassifiedRecord {
        source_text: row.description.clone(),
        category,
        status: RecordStatus::Open,
        source_status: row.status.clone(),
        request_number: ids.request_number,
        reference_number: ids.reference_number,
    }
}

/// Ingest a batch, preserving input order.
pub fn ingest_all(rows: &[InputRow], config: &IngestConfig) -> Vec<ClassifiedRecord> {
    rows.iter().map(|row| ingest(row, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(description: &str, resolution: &str, status: &str, case_type: &str) -> InputRow {
        InputRow {
            description: description.into(),
            resolution_response: resolution.into(),
            status: status.into(),
            case_type: case_type.into(),
        }
    }

    #[test]
    fn arabic_incident_end_to_end() {
        let r = ingest(
            &row("يوجد عطل خطير", "تم التسجيل برقم 1122334", "New", ""),
            &IngestConfig::default(),
        );
        assert_eq!(r.category, Category::Incident);
        assert_eq!(r.request_number.as_deref(), Some("1122334"));
        assert_eq!(r.reference_number, None);
        assert_eq!(r.status, RecordStatus::Open);
        assert_eq!(r.source_text, "يوجد عطل خطير");
        assert_eq!(r.source_status, "New");
    }

    #[test]
    fn sentinel_status_trusts_upstream_label() {
        // The description alone would classify as Complaint.
        let r = ingest(
            &row("شكوى", "", "Classified", "Suggestion - اقتراح"),
            &IngestConfig::default(),
        );
        assert_eq!(r.category, Category::Suggestion);
    }

    #[test]
    fn sentinel_keeps_unknown_label_verbatim() {
        let r = ingest(
            &row("", "", "Classified", "Billing Dispute"),
            &IngestConfig::default(),
        );
        assert_eq!(r.category, Category::Other("Billing Dispute".into()));
    }

    #[test]
    fn sentinel_label_is_not_normalised() {
        let r = ingest(
            &row("يوجد عطل", "", "Classified", "  INCIDENT "),
            &IngestConfig::default(),
        );
        assert_eq!(r.category, Category::Other("  INCIDENT ".into()));
        assert_eq!(r.category.label(), "  INCIDENT ");
        assert_eq!(
            crate::templates::render(&r.category, &Default::default()),
            crate::templates::GENERIC_ACKNOWLEDGEMENT
        );
    }

    #[test]
    fn sentinel_comparison_is_exact() {
        let r = ingest(
            &row("شكوى", "", "classified", "Suggestion - اقتراح"),
            &IngestConfig::default(),
        );
        assert_eq!(r.category, Category::Complaint);
    }

    #[test]
    fn custom_sentinel() {
        let config = IngestConfig::default().with_sentinel("Reviewed");
        let r = ingest(&row("شكوى", "", "Reviewed", "Incident - بلاغ"), &config);
        assert_eq!(r.category, Category::Incident);
    }

    #[test]
    fn extraction_runs_for_trusted_rows() {
        let r = ingest(
            &row("حساب 44556677", "طلب 99887766", "Classified", "Incident - بلاغ"),
            &IngestConfig::default(),
        );
        assert_eq!(r.reference_number.as_deref(), Some("44556677"));
        assert_eq!(r.request_number.as_deref(), Some("99887766"));
    }

    #[test]
    fn empty_row_degrades_to_unclassified() {
        let r = ingest(&InputRow::default(), &IngestConfig::default());
        assert_eq!(r.category, Category::Unclassified);
        assert_eq!(r.request_number, None);
        assert_eq!(r.reference_number, None);
        assert_eq!(r.status, RecordStatus::Open);
    }

    #[test]
    fn batch_preserves_order() {
        let rows = vec![
            row("اقتراح", "", "", ""),
            row("شكوى", "", "", ""),
            row("", "", "", ""),
        ];
        let records = ingest_all(&rows, &IngestConfig::default());
        let cats: Vec<Category> = records.into_iter().map(|r| r.category).collect();
        assert_eq!(
            cats,
            vec![Category::Suggestion, Category::Complaint, Category::Unclassified]
        );
    }
}
