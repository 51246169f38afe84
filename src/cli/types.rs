//! CLI type definitions.
//!
//! This module contains the clap structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "regroup")]
#[command(about = "Build rotating small-group assignments that balance who meets whom", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of participants to group
    #[arg(short, long, value_name = "COUNT")]
    pub students: Option<usize>,

    /// File containing names, one per line (overrides --students)
    #[arg(short, long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Number of rounds to build
    #[arg(short, long, value_name = "ROUNDS")]
    pub rounds: Option<usize>,

    /// File to write to (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Re-render a previously produced JSON session instead of searching
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seed the search for reproducible results
    #[arg(long)]
    pub seed: Option<u64>,
}

/// How the final session is rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw session structure as JSON
    Json,
    /// Per-round tables with one column per group
    Grouped,
    /// Per-round flat name listing
    List,
}

impl Cli {
    /// Explicit `--format` wins; otherwise a `.json` output path implies
    /// JSON, and everything else renders as a list.
    pub fn effective_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        let json_output = self
            .output
            .as_deref()
            .and_then(|path| path.extension())
            .is_some_and(|ext| ext == "json");
        if json_output {
            OutputFormat::Json
        } else {
            OutputFormat::List
        }
    }
}
