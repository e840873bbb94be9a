//! Record types

use serde::Serialize;
use serde_json::Value;

/// One managed object, reduced to the fields the report shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    /// `attributes.name`
    pub name: Option<String>,
    /// True iff `attributes.parent_name` is present, whatever its value
    pub is_child: bool,
    /// `attributes.match_type`
    pub match_type: Option<String>,
    /// `attributes.match`
    pub match_value: Option<String>,
}

impl Record {
    /// Build a record from one element of a page's `data` field.
    ///
    /// Returns `None` when the value has no object-shaped `attributes`.
    /// Attributes that are absent or not strings become `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let attributes = value.get("attributes")?.as_object()?;

        let text = |key: &str| {
            attributes
                .get(key)
                .and_then(Value::as_str)
                .map(String::from)
        };

        Some(Self {
            name: text("name"),
            is_child: attributes.contains_key("parent_name"),
            match_type: text("match_type"),
            match_value: text("match"),
        })
    }
}

/// Records pulled from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in document order
    pub records: Vec<Record>,
    /// Elements of `data` dropped for lacking an `attributes` object
    pub skipped: usize,
}
