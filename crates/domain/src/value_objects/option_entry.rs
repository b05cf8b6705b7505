//! Option entry value object
//!
//! One selectable row of a dropdown, with the optional string metadata the
//! server attaches to individual options (`poolable`, cost, and so on).
//! Entries live for one response; every reload replaces the whole list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default label for the placeholder row of a repopulated select.
pub const PLACEHOLDER_LABEL: &str = "---------";

/// Metadata key carrying the poolable flag on background options.
const POOLABLE_KEY: &str = "poolable";

/// A value/label pair offered by a selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
    /// String-typed option metadata, keyed by attribute name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Bare scalar entry shape: the label is the value itself.
    pub fn scalar(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            metadata: BTreeMap::new(),
        }
    }

    /// Placeholder row: empty value, configurable label.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether this option is marked poolable.
    ///
    /// Fail-open: an absent flag counts as poolable. A present flag counts
    /// only when it case-insensitively equals the literal `true`.
    pub fn poolable(&self) -> bool {
        match self.metadata.get(POOLABLE_KEY) {
            None => true,
            Some(flag) => flag.eq_ignore_ascii_case("true"),
        }
    }
}

/// Poolable policy over a possibly-absent selection.
///
/// No selection at all also defaults to poolable.
pub fn poolable_from_selection(selected: Option<&OptionEntry>) -> bool {
    selected.map(OptionEntry::poolable).unwrap_or(true)
}
