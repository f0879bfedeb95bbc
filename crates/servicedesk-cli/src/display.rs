//! Terminal rendering for records, reply previews, and session summaries.

use servicedesk_core::ClassifiedRecord;
use servicedesk_engine::{ReplyPreview, SessionSummary, SourceFile};

const MAX_TEXT_CHARS: usize = 60;

// ── Public API ──

/// Print one record as a vertical card.
pub fn print_record_card(index: usize, record: &ClassifiedRecord) {
    println!("=== Record {index} ===");
    println!("{}", record.source_text);
    println!();

    println!("Classification");
    print_field("category", record.category.label());
    if !record.category.is_known() {
        print_field("", "(upstream label, generic reply)");
    }
    print_field("status", record.status.as_str());
    if !record.source_status.is_empty() {
        print_field("source_status", &record.source_status);
    }
    println!();

    println!("Identifiers");
    print_field(
        "Case/Request ID - رقم الشكوى/الطلب",
        record.request_number.as_deref().unwrap_or("-"),
    );
    print_field(
        "Account/Bill No. - رقم الحساب/الفاتورة",
        record.reference_number.as_deref().unwrap_or("-"),
    );
    println!();
}

/// Print the reply preview: category, status, prompted fields, then the reply text.
pub fn print_reply_preview(preview: &ReplyPreview) {
    println!("=== Reply for record {} ===", preview.index);
    print_field("Category", preview.category.label());
    print_field("Status", preview.status.as_str());

    if !preview.prompts.is_empty() {
        println!();
        for (field, value) in &preview.prompts {
            let shown = if value.is_empty() { "(not set)" } else { value };
            println!("  {} ({}): {}", field.label_ar(), field.key(), shown);
        }
    }

    println!();
    println!("{}", preview.text);
}

/// Print loaded sources and per-category counts.
pub fn print_summary(summary: &SessionSummary, sources: &[SourceFile]) {
    println!("Sources");
    for source in sources {
        println!(
            "  {:<32} {:>6} rows  {}",
            truncate(&source.name, 32),
            source.rows,
            source.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    println!();

    println!(
        "Records: {} ({} open, {} closed)",
        summary.total, summary.open, summary.closed
    );
    for (category, count) in &summary.by_category {
        println!("  {:<40} {}", category.label(), count);
    }
}

/// Shorten free text for table display, on character boundaries.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Truncate using the default table width.
pub fn truncate_text(text: &str) -> String {
    truncate(text, MAX_TEXT_CHARS)
}

// ── Helpers ──

fn print_field(name: &str, value: &str) {
    println!("  {:<40} {}", name, value);
}
