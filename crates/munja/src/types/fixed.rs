use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::numeric::{coerce_numeric, looks_numeric};

use super::Value;

/// Fixed-data keys that always hold numeric values.
const NUMERIC_KEYS: [&str; 4] = [
    "base_exchange_rate",
    "current_exchange_rate",
    "exchange_rate_diff",
    "company_burden",
];

/// Spreadsheet-wide variables shared by every group in a batch.
///
/// Fixed data is the lowest-precedence resolution source and is immutable
/// during a render batch.
///
/// # Example
///
/// ```
/// use munja::{FixedData, Value};
///
/// let mut fixed = FixedData::new();
/// fixed.insert("bank_account", "국민은행 123-45");
/// fixed.set_text("company_burden", "50,000원");
///
/// assert_eq!(fixed.get("company_burden"), Some(&Value::Int(50_000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedData {
    values: BTreeMap<String, Value>,
}

impl FixedData {
    /// Creates an empty fixed-data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Inserts a raw spreadsheet cell, normalizing it first.
    ///
    /// Known numeric keys and values that look numeric are coerced to
    /// integers; everything else is stored as trimmed text.
    pub fn set_text(&mut self, key: impl Into<String>, raw: &str) {
        let key = key.into();
        let text = Value::Str(raw.trim().to_string());
        let value = if NUMERIC_KEYS.contains(&key.as_str()) || looks_numeric(&text) {
            Value::Int(coerce_numeric(&text))
        } else {
            text
        };
        self.values.insert(key, value);
    }

    /// Looks up a fixed variable.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Iterates over the stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no variables are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
