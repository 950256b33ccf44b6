//! Munja CLI entry point.
//!
//! Provides command-line tools for working with group-message templates:
//! - `munja render` - Render one personalized message per group
//! - `munja check` - Validate a template against the available keys
//! - `munja vars` - List the placeholders a template references

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, RenderArgs, VarsArgs, run_check, run_render, run_vars};

/// Group-message template tools.
#[derive(Debug, Parser)]
#[command(name = "munja")]
#[command(about = "Group-message template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// When to color diagnostic output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Commands,
}

/// Whether diagnostics use color.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render messages for every group in a batch
    Render(RenderArgs),
    /// Check a template before a batch run
    Check(CheckArgs),
    /// List the placeholders in a template
    Vars(VarsArgs),
}

/// Apply the user's color preference before any output happens.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Check(args) => run_check(args),
        Commands::Vars(args) => run_vars(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
