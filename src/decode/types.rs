//! Decoded page types
//!
//! A [`PageDocument`] is the typed view of one decoded listing page. The
//! polymorphic `data` field is resolved into a [`RecordSet`] once, when the
//! document is built, so nothing downstream needs to inspect its shape again.

use serde::Serialize;
use serde_json::Value;

/// The `data` field of a page: one record or an ordered list of records
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSet {
    /// `data` held a single object
    Single(Value),
    /// `data` held an array
    List(Vec<Value>),
}

impl RecordSet {
    /// Resolve a raw `data` value.
    ///
    /// Anything other than an object or an array holds no records.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::Object(_) => Self::Single(value),
            _ => Self::List(Vec::new()),
        }
    }

    /// Number of record-shaped values
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(items) => items.len(),
        }
    }

    /// Whether there are no record-shaped values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the raw record values in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        match self {
            Self::Single(value) => std::slice::from_ref(value).iter(),
            Self::List(items) => items.iter(),
        }
    }
}

/// Version strings reported in a page's `meta` field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiVersion {
    /// `meta.api_version`, empty if absent or not a string
    pub api_version: String,
    /// `meta.sp_version`, empty if absent or not a string
    pub sp_version: String,
}

/// One decoded listing page
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    data: Option<RecordSet>,
    links: Option<Value>,
    meta: Option<Value>,
}

impl PageDocument {
    /// Build a document from a parsed JSON root.
    ///
    /// A root that is not an object yields a document with no fields. A field
    /// set to `null` is present: `links: null` ends pagination without a
    /// warning and `data: null` yields no records.
    pub fn from_value(root: Value) -> Self {
        let Value::Object(mut map) = root else {
            return Self::default();
        };

        Self {
            data: map.remove("data").map(RecordSet::from_value),
            links: map.remove("links"),
            meta: map.remove("meta"),
        }
    }

    /// The resolved `data` field, if present
    pub fn data(&self) -> Option<&RecordSet> {
        self.data.as_ref()
    }

    /// Whether a `links` field was present
    pub fn has_links(&self) -> bool {
        self.links.is_some()
    }

    /// `links.next` when it is a string
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.get("next"))
            .and_then(Value::as_str)
    }

    /// Version strings from `meta`; missing values become empty strings
    pub fn api_version(&self) -> ApiVersion {
        let field = |name: &str| {
            self.meta
                .as_ref()
                .and_then(|meta| meta.get(name))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        ApiVersion {
            api_version: field("api_version"),
            sp_version: field("sp_version"),
        }
    }
}
