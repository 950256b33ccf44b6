//! Numeric coercion and formatting for template values.
//!
//! Spreadsheet cells arrive as display text (`"3,480,000원"`), so every
//! operation here is total: cleaning strips separators and the currency
//! suffix, coercion truncates toward zero, and anything unparseable
//! becomes `0` rather than an error.

use crate::types::Value;

/// Substrings that mark a field name as numeric.
///
/// Used to pick a default value for keys absent from the source data.
pub const NUMERIC_KEY_HINTS: [&str; 15] = [
    "price", "fee", "amount", "balance", "cost", "money", "rate", "count", "size", "금액", "비용",
    "요금", "원", "개수", "인원",
];

/// Returns true if `key` names a numeric field.
///
/// Matching is a case-insensitive substring check against
/// [`NUMERIC_KEY_HINTS`].
pub fn numeric_name(key: &str) -> bool {
    let lowered = key.to_lowercase();
    NUMERIC_KEY_HINTS.iter().any(|hint| lowered.contains(hint))
}

/// Default value for a key missing from the source data.
///
/// Numeric-named keys default to `0`, everything else to the empty string.
pub fn default_for_key(key: &str) -> Value {
    if numeric_name(key) {
        Value::Int(0)
    } else {
        Value::Str(String::new())
    }
}

/// Strips thousands separators, the currency suffix, and spaces.
fn clean_numeric_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ',' && *c != '원' && *c != ' ')
        .collect()
}

/// Returns true if `value` can be treated as a number.
///
/// Integers and floats always can. Strings are cleaned first and must then
/// consist of digits with an optional leading `-` and at most one `.`.
pub fn looks_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::Str(text) => {
            let cleaned = clean_numeric_text(text);
            let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
            digits.chars().any(|c| c.is_ascii_digit())
                && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
                && digits.chars().filter(|c| *c == '.').count() <= 1
        }
        Value::List(_) => false,
    }
}

/// Coerces `value` to an integer, truncating toward zero.
///
/// Total: anything that cannot be parsed coerces to `0`.
///
/// # Example
///
/// ```
/// use munja::Value;
/// use munja::numeric::coerce_numeric;
///
/// assert_eq!(coerce_numeric(&Value::Str("3,480,000원".to_string())), 3_480_000);
/// assert_eq!(coerce_numeric(&Value::Float(1234.9)), 1234);
/// assert_eq!(coerce_numeric(&Value::Str("미정".to_string())), 0);
/// ```
pub fn coerce_numeric(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(f) => *f as i64,
        Value::Str(text) => clean_numeric_text(text)
            .parse::<f64>()
            .map_or(0, |f| f as i64),
        Value::List(_) => 0,
    }
}

/// Returns true if a format spec asks for thousands grouping.
pub fn wants_grouping(format: &str) -> bool {
    format.contains(',') || format.contains('d')
}

/// Formats `n` with comma separators: `3480000` becomes `"3,480,000"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + 4);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        let pos_from_end = len - i;
        out.push(ch);
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(',');
        }
    }
    out
}

/// Renders a resolved value under an optional format spec.
///
/// A grouping spec (`,` or `d`) formats numeric-looking values with
/// thousands separators; everything else falls back to the plain string
/// form, including numeric specs applied to non-numeric values.
pub fn format_value(value: &Value, format: Option<&str>) -> String {
    match format {
        Some(spec) if wants_grouping(spec) && looks_numeric(value) => {
            group_thousands(coerce_numeric(value))
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_small() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn test_group_thousands_grouping() {
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(3_480_000), "3,480,000");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-1234), "-1,234");
        assert_eq!(group_thousands(-999), "-999");
    }

    #[test]
    fn test_round_trip_up_to_billion() {
        for n in [0, 1, 12, 999, 1000, 54_321, 3_480_000, 999_999_999, 1_000_000_000] {
            let formatted = group_thousands(n);
            assert_eq!(coerce_numeric(&Value::Str(formatted)), n);
        }
    }

    #[test]
    fn test_looks_numeric_currency_string() {
        assert!(looks_numeric(&Value::Str("3,480,000원".to_string())));
        assert!(looks_numeric(&Value::Str(" 1 200 ".to_string())));
        assert!(looks_numeric(&Value::Str("-45.5".to_string())));
    }

    #[test]
    fn test_looks_numeric_rejects_text() {
        assert!(!looks_numeric(&Value::Str("미정".to_string())));
        assert!(!looks_numeric(&Value::Str("".to_string())));
        assert!(!looks_numeric(&Value::Str("-".to_string())));
        assert!(!looks_numeric(&Value::Str("1.2.3".to_string())));
        assert!(!looks_numeric(&Value::List(vec!["김철수".to_string()])));
    }

    #[test]
    fn test_looks_numeric_primitives() {
        assert!(looks_numeric(&Value::Int(-3)));
        assert!(looks_numeric(&Value::Float(0.5)));
    }

    #[test]
    fn test_coerce_currency_string() {
        assert_eq!(coerce_numeric(&Value::Str("3,480,000원".to_string())), 3_480_000);
        assert_eq!(coerce_numeric(&Value::Str("50,000".to_string())), 50_000);
    }

    #[test]
    fn test_coerce_truncates_toward_zero() {
        assert_eq!(coerce_numeric(&Value::Str("12.9".to_string())), 12);
        assert_eq!(coerce_numeric(&Value::Str("-12.9".to_string())), -12);
        assert_eq!(coerce_numeric(&Value::Float(-0.7)), 0);
    }

    #[test]
    fn test_coerce_failure_returns_zero() {
        assert_eq!(coerce_numeric(&Value::Str("천만원".to_string())), 0);
        assert_eq!(coerce_numeric(&Value::Str("".to_string())), 0);
        assert_eq!(coerce_numeric(&Value::List(vec![])), 0);
    }

    #[test]
    fn test_numeric_name() {
        assert!(numeric_name("total_balance"));
        assert!(numeric_name("EXCHANGE_FEE"));
        assert!(numeric_name("고객부담금액"));
        assert!(numeric_name("인원수"));
        assert!(!numeric_name("product_name"));
        assert!(!numeric_name("departure_date"));
        // "account" contains the hint "count"
        assert!(numeric_name("bank_account"));
    }

    #[test]
    fn test_default_for_key() {
        assert_eq!(default_for_key("deposit_amount"), Value::Int(0));
        assert_eq!(default_for_key("team_name"), Value::Str(String::new()));
    }

    #[test]
    fn test_format_value_grouping() {
        assert_eq!(format_value(&Value::Int(3_480_000), Some(",")), "3,480,000");
        assert_eq!(
            format_value(&Value::Str("3,480,000원".to_string()), Some("d")),
            "3,480,000"
        );
    }

    #[test]
    fn test_format_value_fallback() {
        assert_eq!(format_value(&Value::Str("미정".to_string()), Some(",")), "미정");
        assert_eq!(format_value(&Value::Int(42), None), "42");
        assert_eq!(format_value(&Value::Int(42), Some(">8")), "42");
    }
}
