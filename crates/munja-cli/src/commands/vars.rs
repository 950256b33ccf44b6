//! Implementation of the `munja vars` command.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use munja::{PlaceholderKind, parse_placeholders};
use serde::Serialize;

use crate::output::kind_label;
use crate::output::table::{PlaceholderRow, format_placeholder_table};

use super::render::load_text;

/// Arguments for the vars command.
#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Template text file to list placeholders from
    #[arg(long, required = true)]
    pub template: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct VarJson {
    key: String,
    kind: &'static str,
    format: Option<String>,
    count: usize,
}

/// Run the vars command.
pub fn run_vars(args: VarsArgs) -> miette::Result<i32> {
    let template = load_text(&args.template, "template")?;
    let rows = collect_rows(&template);

    if args.json {
        let vars: Vec<VarJson> = rows
            .iter()
            .map(|row| VarJson {
                key: row.key.clone(),
                kind: row.kind,
                format: row.format.clone(),
                count: row.count,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&vars).expect("JSON serialization should not fail")
        );
    } else if rows.is_empty() {
        println!("no placeholders found");
    } else {
        println!("{}", format_placeholder_table(&rows));
    }

    Ok(exitcode::OK)
}

/// Aggregate placeholder occurrences by syntax and key, in order of
/// first appearance.
fn collect_rows(template: &str) -> Vec<PlaceholderRow> {
    let mut index: HashMap<(PlaceholderKind, String), usize> = HashMap::new();
    let mut rows: Vec<PlaceholderRow> = Vec::new();

    for placeholder in parse_placeholders(template) {
        let slot = (placeholder.kind, placeholder.key.clone());
        match index.get(&slot) {
            Some(&position) => rows[position].count += 1,
            None => {
                index.insert(slot, rows.len());
                rows.push(PlaceholderRow {
                    key: placeholder.key,
                    kind: kind_label(placeholder.kind),
                    format: placeholder.format,
                    count: 1,
                });
            }
        }
    }

    rows
}
