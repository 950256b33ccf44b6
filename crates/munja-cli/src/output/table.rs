//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Render outcome for a single group.
pub struct GroupSummary {
    /// Group id (e.g., "G001").
    pub group_id: String,
    /// Team name the group was keyed on.
    pub team_name: String,
    /// Number of members in the group.
    pub members: usize,
    /// Number of placeholders that failed to resolve.
    pub unresolved: usize,
}

/// Format per-group render outcomes as an ASCII table.
pub fn format_group_summary_table(groups: &[GroupSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Group", "Team", "Members", "Unresolved"]);

    for group in groups {
        table.add_row(vec![
            group.group_id.clone(),
            group.team_name.clone(),
            group.members.to_string(),
            group.unresolved.to_string(),
        ]);
    }

    table
}

/// One distinct placeholder found in a template.
pub struct PlaceholderRow {
    /// The key the placeholder looks up.
    pub key: String,
    /// Syntax label ("brace" or "column").
    pub kind: &'static str,
    /// Format spec of the first occurrence, if any.
    pub format: Option<String>,
    /// Number of occurrences in the template.
    pub count: usize,
}

/// Format a template's distinct placeholders as an ASCII table.
pub fn format_placeholder_table(rows: &[PlaceholderRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Syntax", "Format", "Count"]);

    for row in rows {
        table.add_row(vec![
            row.key.clone(),
            row.kind.to_string(),
            row.format.clone().unwrap_or_default(),
            row.count.to_string(),
        ]);
    }

    table
}
