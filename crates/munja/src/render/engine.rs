//! Single-pass template rendering.
//!
//! Splices resolved placeholder values between the literal slices of the
//! template, building the output left to right without re-scanning
//! substituted text.

use std::collections::BTreeMap;

use crate::numeric::format_value;
use crate::parser::parse_placeholders;
use crate::types::{FixedData, GroupRecord, RenderedMessage};

use super::computed::computed_variables;
use super::error::BatchError;
use super::resolver::{Sources, resolve};

/// The in-message marker for a key no source could resolve.
pub fn missing_marker(key: &str) -> String {
    format!("❌[{key}]")
}

/// Outcome details for one rendered template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Keys that no source could resolve, in template order.
    pub unresolved: Vec<String>,

    /// Total placeholder occurrences in the template.
    pub placeholder_count: usize,
}

impl RenderReport {
    /// True when every placeholder resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Renders one message for one group.
///
/// Total: unresolved keys become visible `❌[key]` markers and malformed
/// placeholder syntax passes through as literal text.
///
/// # Example
///
/// ```
/// use munja::{FixedData, GroupRecord, render};
///
/// let group = GroupRecord::builder()
///     .group_id("G001".to_string())
///     .team_name("김철수팀".to_string())
///     .members(vec!["김철수".to_string(), "이영희".to_string()])
///     .build();
///
/// let message = render("{group_members_text} 안녕하세요", &group, &FixedData::new());
/// assert_eq!(message, "김철수님, 이영희님 안녕하세요");
/// ```
pub fn render(template: &str, group: &GroupRecord, fixed: &FixedData) -> String {
    render_with_report(template, group, fixed).0
}

/// Renders one message and reports which placeholders resolved.
pub fn render_with_report(
    template: &str,
    group: &GroupRecord,
    fixed: &FixedData,
) -> (String, RenderReport) {
    let computed = computed_variables(group, fixed);
    let sources = Sources {
        computed: &computed,
        group,
        fixed,
    };
    let placeholders = parse_placeholders(template);

    let mut out = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut last_end = 0;

    for placeholder in &placeholders {
        out.push_str(&template[last_end..placeholder.span.start]);
        match resolve(&sources, placeholder.kind, &placeholder.key) {
            Some(value) => out.push_str(&format_value(&value, placeholder.format.as_deref())),
            None => {
                out.push_str(&missing_marker(&placeholder.key));
                unresolved.push(placeholder.key.clone());
            }
        }
        last_end = placeholder.span.end;
    }
    out.push_str(&template[last_end..]);

    let report = RenderReport {
        unresolved,
        placeholder_count: placeholders.len(),
    };
    (out, report)
}

/// Renders every group in a batch, keyed by group id.
///
/// Groups render independently; a group whose data is missing keys still
/// produces a message with markers. Hard errors are reserved for an empty
/// batch and for templates where no placeholder resolves for any group.
pub fn render_batch(
    template: &str,
    groups: &BTreeMap<String, GroupRecord>,
    fixed: &FixedData,
) -> Result<BTreeMap<String, RenderedMessage>, BatchError> {
    if groups.is_empty() {
        return Err(BatchError::NoGroups);
    }

    let mut messages = BTreeMap::new();
    let mut total_placeholders = 0;
    let mut total_unresolved = 0;

    for (group_id, group) in groups {
        let (message, report) = render_with_report(template, group, fixed);
        total_placeholders += report.placeholder_count;
        total_unresolved += report.unresolved.len();
        messages.insert(
            group_id.clone(),
            RenderedMessage {
                group_id: group_id.clone(),
                message,
                group_info: group.clone(),
            },
        );
    }

    // Every placeholder unresolved in every group means the template does
    // not match the mapped data at all
    if total_placeholders > 0 && total_unresolved == total_placeholders {
        return Err(BatchError::NothingResolved);
    }

    Ok(messages)
}
