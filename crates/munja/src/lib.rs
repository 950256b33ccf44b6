pub mod numeric;
pub mod order;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::{
    Placeholder, PlaceholderKind, TemplateWarning, parse_placeholders, placeholder_keys,
    validate_template,
};
pub use render::{
    BatchError, RenderReport, render, render_batch, render_with_report, suggest_keys,
};
pub use types::{FixedData, GroupRecord, RenderedMessage, Value, member_list_text};

/// Creates a `BTreeMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or member lists directly.
///
/// # Example
///
/// ```
/// use munja::attrs;
///
/// let attrs = attrs! { "total_balance" => 3_480_000, "departure_date" => "2024-12-20" };
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs["total_balance"].as_int(), Some(3_480_000));
/// assert_eq!(attrs["departure_date"].as_str(), Some("2024-12-20"));
/// ```
#[macro_export]
macro_rules! attrs {
    {} => {
        ::std::collections::BTreeMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
