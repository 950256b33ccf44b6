//! Implementation of the `munja check` command.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use munja::numeric::default_for_key;
use munja::render::{Sources, computed_variables, known_keys, resolve};
use munja::{
    FixedData, GroupRecord, Placeholder, parse_placeholders, suggest_keys, validate_template,
};
use serde::Serialize;

use crate::output::{UnresolvedKeyDiagnostic, kind_label};

use super::render::{load_fixed, load_groups, load_text};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Template text file to check
    #[arg(long, required = true)]
    pub template: PathBuf,

    /// Groups JSON file; when given, every placeholder key is checked
    /// against the available data sources
    #[arg(long)]
    pub groups: Option<PathBuf>,

    /// Fixed-data JSON file with shared values
    #[arg(long)]
    pub fixed: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero code when warnings or unresolved keys are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct CheckJson {
    warnings: Vec<String>,
    unresolved: Vec<UnresolvedJson>,
}

#[derive(Serialize)]
struct UnresolvedJson {
    key: String,
    kind: &'static str,
    start: usize,
    end: usize,
    suggestions: Vec<String>,
    default: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let template = load_text(&args.template, "template")?;
    let warnings = validate_template(&template);

    let unresolved = match &args.groups {
        Some(path) => {
            let groups = load_groups(path)?;
            let fixed = match &args.fixed {
                Some(path) => load_fixed(path)?,
                None => FixedData::new(),
            };
            unresolved_placeholders(&template, &groups, &fixed)
        }
        None => Vec::new(),
    };

    if args.json {
        let report = CheckJson {
            warnings: warnings.iter().map(ToString::to_string).collect(),
            unresolved: unresolved
                .iter()
                .map(|(placeholder, suggestions)| UnresolvedJson {
                    key: placeholder.key.clone(),
                    kind: kind_label(placeholder.kind),
                    start: placeholder.span.start,
                    end: placeholder.span.end,
                    suggestions: suggestions.clone(),
                    default: default_for_key(&placeholder.key).to_string(),
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization should not fail")
        );
    } else {
        for warning in &warnings {
            println!("warning: {warning}");
        }
        for (placeholder, suggestions) in &unresolved {
            let diagnostic =
                UnresolvedKeyDiagnostic::new(&args.template, &template, placeholder, suggestions);
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        if warnings.is_empty() && unresolved.is_empty() {
            let count = parse_placeholders(&template).len();
            if args.groups.is_some() {
                println!("ok: {count} placeholder(s), all keys resolvable");
            } else {
                println!("ok: {count} placeholder(s)");
            }
        }
    }

    if args.strict && !(warnings.is_empty() && unresolved.is_empty()) {
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}

/// Distinct placeholders no group can resolve, with suggested keys.
///
/// A key counts as resolved when any group provides it, so attributes
/// present on only some groups do not raise false alarms.
fn unresolved_placeholders(
    template: &str,
    groups: &BTreeMap<String, GroupRecord>,
    fixed: &FixedData,
) -> Vec<(Placeholder, Vec<String>)> {
    let mut seen = HashSet::new();
    let mut unresolved = Vec::new();

    for placeholder in parse_placeholders(template) {
        if !seen.insert((placeholder.kind, placeholder.key.clone())) {
            continue;
        }

        let resolvable = groups.values().any(|group| {
            let computed = computed_variables(group, fixed);
            let sources = Sources {
                computed: &computed,
                group,
                fixed,
            };
            resolve(&sources, placeholder.kind, &placeholder.key).is_some()
        });
        if resolvable {
            continue;
        }

        let mut known: Vec<String> = Vec::new();
        for group in groups.values() {
            let computed = computed_variables(group, fixed);
            let sources = Sources {
                computed: &computed,
                group,
                fixed,
            };
            known.extend(known_keys(&sources, placeholder.kind));
        }
        known.sort();
        known.dedup();

        let suggestions = suggest_keys(&placeholder.key, known.iter());
        unresolved.push((placeholder, suggestions));
    }

    unresolved
}
