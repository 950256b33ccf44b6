//! Placeholder resolution across the data sources.
//!
//! Brace placeholders walk computed variables, the group record, and fixed
//! data in that order. Column placeholders consult only the raw-header map,
//! so spreadsheet columns and program variables never shadow each other.

use std::collections::HashMap;

use crate::parser::PlaceholderKind;
use crate::types::{CORE_FIELDS, FixedData, GroupRecord, Value};

use super::computed::COMPUTED_KEYS;

/// The data sources one render call resolves against.
#[derive(Debug)]
pub struct Sources<'a> {
    /// Render-time computed variables, the highest-precedence source.
    pub computed: &'a HashMap<String, Value>,

    /// The group being rendered.
    pub group: &'a GroupRecord,

    /// Batch-wide fixed data, the lowest-precedence source.
    pub fixed: &'a FixedData,
}

/// Resolves one placeholder key against the sources.
///
/// Brace keys resolve computed variables first, then the group's mapped
/// attributes, then its core fields, then fixed data. Column keys resolve
/// against the verbatim spreadsheet headers only. `None` means no source
/// knows the key.
pub fn resolve(sources: &Sources<'_>, kind: PlaceholderKind, key: &str) -> Option<Value> {
    match kind {
        PlaceholderKind::Column => sources.group.column(key).cloned(),
        PlaceholderKind::Brace => sources
            .computed
            .get(key)
            .cloned()
            .or_else(|| sources.group.attributes.get(key).cloned())
            .or_else(|| sources.group.core_field(key))
            .or_else(|| sources.fixed.get(key).cloned()),
    }
}

/// Every key a template author could reference for this source set.
///
/// Sorted and deduplicated; used for near-miss suggestions on unresolved
/// keys.
pub fn known_keys(sources: &Sources<'_>, kind: PlaceholderKind) -> Vec<String> {
    match kind {
        PlaceholderKind::Column => sources.group.columns.keys().cloned().collect(),
        PlaceholderKind::Brace => {
            let mut keys: Vec<String> = COMPUTED_KEYS.iter().map(|k| (*k).to_string()).collect();
            keys.extend(CORE_FIELDS.iter().map(|k| (*k).to_string()));
            keys.extend(sources.group.attributes.keys().cloned());
            keys.extend(sources.fixed.keys().cloned());
            keys.sort();
            keys.dedup();
            keys
        }
    }
}
