use serde::{Deserialize, Serialize};

/// A runtime value carried by group attributes, fixed data, and computed
/// variables.
///
/// The `Value` enum provides a dynamic type system for mapped spreadsheet
/// cells, allowing numbers, strings, and member-name lists to be passed
/// interchangeably to the renderer.
///
/// # Example
///
/// ```
/// use munja::Value;
///
/// // Numbers become Value::Int
/// let balance: Value = 3_480_000.into();
///
/// // Strings become Value::Str
/// let product: Value = "하와이 힐링 7일".into();
///
/// assert_eq!(balance.as_int(), Some(3_480_000));
/// assert_eq!(product.as_str(), Some("하와이 힐링 7일"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer number (balances, fees, counts).
    Int(i64),

    /// A floating-point number (exchange rates).
    Float(f64),

    /// A string value (product names, dates, labels).
    Str(String),

    /// An ordered list of member names.
    List(Vec<String>),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a member list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(names) => Some(names),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(names) => write!(f, "{}", member_list_text(names)),
        }
    }
}

/// Joins member names with the honorific suffix.
///
/// `["김철수", "이영희"]` becomes `"김철수님, 이영희님"`. An empty slice
/// produces an empty string.
///
/// # Example
///
/// ```
/// use munja::member_list_text;
///
/// let names = vec!["김철수".to_string(), "이영희".to_string()];
/// assert_eq!(member_list_text(&names), "김철수님, 이영희님");
/// ```
pub fn member_list_text(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("{name}님"))
        .collect::<Vec<_>>()
        .join(", ")
}

// Conversions from primitives and strings

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(names: Vec<String>) -> Self {
        Value::List(names)
    }
}
