//! Operator-supplied values used when composing a reply.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Named field an operator can fill in while composing a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtraField {
    Coords,
    Name,
    Contact,
    RequestNumber,
}

impl ExtraField {
    /// Placeholder key used in reply templates.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Coords => "coords",
            Self::Name => "name",
            Self::Contact => "contact",
            Self::RequestNumber => "requestNumber",
        }
    }

    /// Arabic prompt shown next to the input.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Coords => "الإحداثيات",
            Self::Name => "اسم المتعامل",
            Self::Contact => "رقم التواصل",
            Self::RequestNumber => "رقم الطلب",
        }
    }
}

impl fmt::Display for ExtraField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field values for one record, keyed by placeholder name.
///
/// Never required to be complete: lookups of unset fields yield `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraFields(BTreeMap<String, String>);

impl ExtraFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: ExtraField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: ExtraField, value: impl Into<String>) {
        self.0.insert(field.key().to_string(), value.into());
    }

    /// Value for a placeholder key, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ExtraField, String)> for ExtraFields {
    fn from_iter<I: IntoIterator<Item = (ExtraField, String)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (field, value) in iter {
            fields.set(field, value);
        }
        fields
    }
}
