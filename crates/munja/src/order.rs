//! Ordering helpers for batch output.
//!
//! Messages render into a map keyed by group id; callers pick the display
//! order afterwards. Team-name ordering is natural: digit runs compare as
//! numbers, so "2팀" sorts before "10팀".

use std::collections::BTreeMap;

use crate::types::RenderedMessage;

/// One comparable segment of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortPart {
    Number(u64),
    Text(String),
}

/// Splits `text` into alternating digit and non-digit runs.
///
/// Digit runs compare numerically, everything else case-insensitively.
pub fn natural_key(text: &str) -> Vec<SortPart> {
    let mut parts = Vec::new();
    let mut digits = String::new();
    let mut others = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            if !others.is_empty() {
                parts.push(SortPart::Text(others.to_lowercase()));
                others.clear();
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                parts.push(SortPart::Number(digits.parse().unwrap_or(u64::MAX)));
                digits.clear();
            }
            others.push(c);
        }
    }
    if !digits.is_empty() {
        parts.push(SortPart::Number(digits.parse().unwrap_or(u64::MAX)));
    }
    if !others.is_empty() {
        parts.push(SortPart::Text(others.to_lowercase()));
    }
    parts
}

/// Messages in the order their groups appeared in the source sheet.
pub fn sorted_by_sheet(messages: &BTreeMap<String, RenderedMessage>) -> Vec<&RenderedMessage> {
    let mut ordered: Vec<&RenderedMessage> = messages.values().collect();
    ordered.sort_by_key(|rendered| rendered.group_info.sheet_order);
    ordered
}

/// Messages ordered by team name, naturally.
pub fn sorted_by_team(messages: &BTreeMap<String, RenderedMessage>) -> Vec<&RenderedMessage> {
    let mut ordered: Vec<&RenderedMessage> = messages.values().collect();
    ordered.sort_by_key(|rendered| natural_key(&rendered.group_info.team_name));
    ordered
}
