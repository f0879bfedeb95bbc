//! Request-type taxonomy for customer-service records.
//!
//! Every category carries a fixed bilingual display label. Upstream data that
//! was already classified by hand arrives as one of these labels; anything we
//! do not recognise is kept verbatim in [`Category::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::ExtraField;

/// Classification label assigned to a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Complaint,
    RequestForService,
    Incident,
    Compliment,
    Information,
    Suggestion,
    Unclassified,
    /// Upstream label outside the known taxonomy, kept as given.
    Other(String),
}

impl Category {
    /// The closed set of known categories, in classifier priority order
    /// (with `Unclassified` last).
    pub const KNOWN: [Category; 7] = [
        Category::Complaint,
        Category::RequestForService,
        Category::Incident,
        Category::Compliment,
        Category::Information,
        Category::Suggestion,
        Category::Unclassified,
    ];

    /// Bilingual display label, e.g. `"Incident - بلاغ"`.
    pub fn label(&self) -> &str {
        match self {
            Self::Complaint => "Complaint - شكوى",
            Self::RequestForService => "Request for Service - طلب الخدمة",
            Self::Incident => "Incident - بلاغ",
            Self::Compliment => "Compliment - ثناء",
            Self::Information => "Information - معلومات",
            Self::Suggestion => "Suggestion - اقتراح",
            Self::Unclassified => "غير مصنف",
            Self::Other(label) => label,
        }
    }

    /// Extra fields an operator is prompted for when composing a reply.
    pub fn reply_fields(&self) -> &'static [ExtraField] {
        match self {
            Self::Incident => &[ExtraField::Coords, ExtraField::Name, ExtraField::Contact],
            Self::RequestForService => &[ExtraField::RequestNumber],
            _ => &[],
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Resolve an upstream label to a category.
    ///
    /// Only an exact bilingual label maps to a known category. Anything else
    /// is kept untouched in `Other`, whitespace and case included. An empty
    /// label resolves to `Unclassified`.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() {
            return Self::Unclassified;
        }
        Self::KNOWN
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_label(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for c in Category::KNOWN {
            assert_eq!(Category::from_label(c.label()), c);
        }
    }

    #[test]
    fn near_miss_labels_are_not_normalised() {
        for raw in ["Incident", "  INCIDENT ", "incident - بلاغ", "بلاغ", " Incident - بلاغ"] {
            assert_eq!(Category::from_label(raw), Category::Other(raw.into()), "{raw:?}");
        }
    }

    #[test]
    fn unknown_label_kept_verbatim() {
        let c = Category::from_label(" Billing Dispute ");
        assert_eq!(c, Category::Other(" Billing Dispute ".into()));
        assert_eq!(c.label(), " Billing Dispute ");
        assert!(!c.is_known());
    }

    #[test]
    fn empty_label_is_unclassified() {
        assert_eq!(Category::from_label(""), Category::Unclassified);
        assert_eq!(Category::from_label("   "), Category::Other("   ".into()));
    }

    #[test]
    fn reply_fields_per_category() {
        assert_eq!(
            Category::Incident.reply_fields(),
            &[ExtraField::Coords, ExtraField::Name, ExtraField::Contact]
        );
        assert_eq!(
            Category::RequestForService.reply_fields(),
            &[ExtraField::RequestNumber]
        );
        assert!(Category::Complaint.reply_fields().is_empty());
        assert!(Category::Other("x".into()).reply_fields().is_empty());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::Incident).unwrap();
        assert_eq!(json, "\"Incident - بلاغ\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Incident);
    }
}
