use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Value;

/// Core field names addressable by brace placeholders.
///
/// These resolve after mapped attributes, so a mapping that reuses one of
/// these names shadows the core field.
pub const CORE_FIELDS: [&str; 5] = ["group_id", "team_name", "sender_group", "sender", "members"];

/// A single customer group assembled from spreadsheet rows.
///
/// Records are produced by the grouping step and consumed read-only by the
/// renderer. Mapped cells are stored twice: under the program variable name
/// in `attributes` and under the verbatim spreadsheet header in `columns`,
/// so both placeholder syntaxes can address the same cell independently.
///
/// # Example
///
/// ```
/// use munja::{GroupRecord, Value};
///
/// let group = GroupRecord::builder()
///     .group_id(GroupRecord::sequential_id(1))
///     .team_name("김철수팀".to_string())
///     .members(vec!["김철수".to_string(), "이영희".to_string()])
///     .build();
///
/// assert_eq!(group.group_id, "G001");
/// assert_eq!(group.core_field("team_name"), Some(Value::Str("김철수팀".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Stable synthetic identifier, `G001` style, in first-seen sheet order.
    pub group_id: String,

    /// Team name, one of the two grouping keys.
    pub team_name: String,

    /// Sending group, the other grouping key.
    #[builder(default)]
    #[serde(default)]
    pub sender_group: String,

    /// Member names in original row order.
    #[builder(default)]
    #[serde(default)]
    pub members: Vec<String>,

    /// Representative member, the first one with contact data.
    #[builder(default)]
    #[serde(default)]
    pub sender: String,

    /// Row index of the group's first spreadsheet row, for display ordering.
    #[builder(default)]
    #[serde(default)]
    pub sheet_order: usize,

    /// Mapped cells keyed by program variable name.
    #[builder(default)]
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,

    /// The same cells keyed by verbatim spreadsheet header.
    #[builder(default)]
    #[serde(default)]
    pub columns: BTreeMap<String, Value>,
}

impl GroupRecord {
    /// Formats the canonical sequential group id: `1` becomes `"G001"`.
    pub fn sequential_id(n: usize) -> String {
        format!("G{n:03}")
    }

    /// Looks up one of the named core fields by its variable name.
    ///
    /// `members` is returned as [`Value::List`] so the renderer can apply
    /// the member-list join. Mapped attributes are not consulted here.
    pub fn core_field(&self, key: &str) -> Option<Value> {
        match key {
            "group_id" => Some(Value::Str(self.group_id.clone())),
            "team_name" => Some(Value::Str(self.team_name.clone())),
            "sender_group" => Some(Value::Str(self.sender_group.clone())),
            "sender" => Some(Value::Str(self.sender.clone())),
            "members" => Some(Value::List(self.members.clone())),
            _ => None,
        }
    }

    /// Looks up a raw spreadsheet header in the column map.
    pub fn column(&self, header: &str) -> Option<&Value> {
        self.columns.get(header)
    }

    /// Number of members in the group.
    pub fn size(&self) -> usize {
        self.members.len()
    }
}
