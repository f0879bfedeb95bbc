//! Canned replies per category.
//!
//! Templates are static data keyed by category. Placeholders are written
//! `{key}` where `key` is an [`ExtraField`](servicedesk_core::ExtraField) key;
//! unset fields render as empty strings. Rendering is a single pass, so a
//! value that itself looks like a placeholder is inserted literally.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use servicedesk_core::{Category, ExtraFields};

// ── Template table ──

const REQUEST_FOR_SERVICE: &str = "السلام عليكم ورحمة الله وبركاته\n\n\
السيد\n\
تحية طيبة وبعد,\n\n\
يرجى التكرم ومتابعة الطلب رقم: {requestNumber}.\n\n\
ولكم جزيل الشكر";

const COMPLAINT: &str = "السلام عليكم ورحمة الله وبركاته\n\n\
السيد\n\
تحية طيبة وبعد,\n\n\
يرجى العلم بأننا تلقينا شكوى بخصوص\n\n\
ولك جزيل الشكر";

const INCIDENT: &str = "السلام عليكم ورحمة الله وبركاته\n\n\
المهندسين الكرام\n\
تحية طيبة وبعد,\n\n\
يرجى التكرم والإطلاع على الصور المرفقة وعمل اللازم حيث وردنا بلاغ\n\n\
الإحداثيات: {coords}\n\
اسم المتعامل: {name}\n\
رقم التواصل: {contact}\n\n\
ولكم جزيل الشكر";

/// Shared acknowledgement for every category without its own template.
pub const GENERIC_ACKNOWLEDGEMENT: &str =
    "نشكركم على تواصلكم، تم تسجيل طلبكم وسيتم التعامل معه من قبل الفريق المختص.";

const TEMPLATES: &[(Category, &str)] = &[
    (Category::RequestForService, REQUEST_FOR_SERVICE),
    (Category::Complaint, COMPLAINT),
    (Category::Incident, INCIDENT),
];

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z]+)\}").expect("placeholder pattern is valid"));

// ── Public API ──

/// Raw template for a category, falling back to the generic acknowledgement.
pub fn template_for(category: &Category) -> &'static str {
    TEMPLATES
        .iter()
        .find(|(c, _)| c == category)
        .map(|(_, body)| *body)
        .unwrap_or(GENERIC_ACKNOWLEDGEMENT)
}

/// Placeholder keys referenced by a category's template, in order of appearance.
pub fn placeholders(category: &Category) -> Vec<&'static str> {
    RE_PLACEHOLDER
        .captures_iter(template_for(category))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Render the reply for `category` with the given field values.
///
/// Pure: identical inputs always produce identical output.
pub fn render(category: &Category, fields: &ExtraFields) -> String {
    RE_PLACEHOLDER
        .replace_all(template_for(category), |caps: &Captures| {
            fields.get(&caps[1]).to_string()
        })
        .into_owned()
}
