//! Implementation of the `munja render` command.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use munja::order::{sorted_by_sheet, sorted_by_team};
use munja::{FixedData, GroupRecord, render_batch, render_with_report};

use crate::output::table::{GroupSummary, format_group_summary_table};
use crate::output::text::format_messages_text;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template text file
    #[arg(long, required = true)]
    pub template: PathBuf,

    /// Groups JSON file (object keyed by group id)
    #[arg(long, required = true)]
    pub groups: PathBuf,

    /// Fixed-data JSON file (flat object of shared variables)
    #[arg(long)]
    pub fixed: Option<PathBuf>,

    /// Message ordering in the output
    #[arg(long, value_enum, default_value_t = SortOrder::Sheet)]
    pub sort: SortOrder,

    /// Output rendered messages as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a per-group summary table instead of the messages
    #[arg(long)]
    pub summary: bool,
}

/// Output ordering for rendered messages.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrder {
    /// Original spreadsheet row order
    Sheet,
    /// Natural team-name order
    Team,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let template = load_text(&args.template, "template")?;
    let groups = load_groups(&args.groups)?;
    let fixed = match &args.fixed {
        Some(path) => load_fixed(path)?,
        None => FixedData::new(),
    };

    let messages = match render_batch(&template, &groups, &fixed) {
        Ok(messages) => messages,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Render error: {}", e);
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let ordered = match args.sort {
        SortOrder::Sheet => sorted_by_sheet(&messages),
        SortOrder::Team => sorted_by_team(&messages),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ordered).expect("JSON serialization should not fail")
        );
    } else if args.summary {
        let rows: Vec<GroupSummary> = ordered
            .iter()
            .map(|rendered| {
                let (_, report) = render_with_report(&template, &rendered.group_info, &fixed);
                GroupSummary {
                    group_id: rendered.group_id.clone(),
                    team_name: rendered.group_info.team_name.clone(),
                    members: rendered.group_info.size(),
                    unresolved: report.unresolved.len(),
                }
            })
            .collect();
        println!("{}", format_group_summary_table(&rows));
    } else {
        println!("{}", format_messages_text(&ordered));
    }

    Ok(exitcode::OK)
}

/// Read a UTF-8 text file, labelling the error with the file's role.
pub fn load_text(path: &Path, role: &str) -> miette::Result<String> {
    read_to_string(path)
        .map_err(|e| miette::miette!("Cannot read {} file {}: {}", role, path.display(), e))
}

/// Load the groups file: a JSON object keyed by group id.
pub fn load_groups(path: &Path) -> miette::Result<BTreeMap<String, GroupRecord>> {
    let content = load_text(path, "groups")?;
    serde_json::from_str(&content)
        .map_err(|e| miette::miette!("Cannot parse groups file {}: {}", path.display(), e))
}

/// Load the fixed-data file: a flat JSON object of shared variables.
pub fn load_fixed(path: &Path) -> miette::Result<FixedData> {
    let content = load_text(path, "fixed-data")?;
    serde_json::from_str(&content)
        .map_err(|e| miette::miette!("Cannot parse fixed-data file {}: {}", path.display(), e))
}
