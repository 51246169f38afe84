//! Session rendering: the output side of the tool.
//!
//! Rendering never reinterprets a session; all three formats enumerate the
//! same groups of the same participants, which is what makes the `--input`
//! reformat path a pure round-trip.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use comfy_table::{presets, Cell, ContentArrangement, Table};

use crate::cli::types::OutputFormat;
use crate::domain::error::ConfigError;
use crate::domain::models::{PairMatrix, Roster, Session, SELF_SENTINEL};

const ROUND_SEPARATOR: &str = "---------------------------------------";

/// Open the output destination, stdout when no path is given.
///
/// Opened before the search starts so an unwritable path fails fast instead
/// of after hours of searching.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, ConfigError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConfigError::OutputUnwritable {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Render a session in the requested format.
pub fn render(
    session: &Session,
    roster: &Roster,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(session, out),
        OutputFormat::List => render_list(session, roster, out),
        OutputFormat::Grouped => render_grouped(session, roster, out),
    }
}

fn render_json(session: &Session, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(&mut *out, session)?;
    writeln!(out)?;
    Ok(())
}

fn render_list(session: &Session, roster: &Roster, out: &mut dyn Write) -> Result<()> {
    for (index, round) in session.iter().enumerate() {
        write_round_header(index, out)?;
        for group in round {
            for &member in group {
                writeln!(out, "  {}", roster.name(member))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_grouped(session: &Session, roster: &Roster, out: &mut dyn Write) -> Result<()> {
    for (index, round) in session.iter().enumerate() {
        write_round_header(index, out)?;

        let mut table = Table::new();
        table
            .load_preset(presets::ASCII_MARKDOWN)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header((1..=round.len()).map(|group| Cell::new(format!("Group {group}"))));

        let tallest = round.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..tallest {
            table.add_row(round.iter().map(|group| {
                group
                    .get(row)
                    .map_or_else(String::new, |&member| roster.name(member).to_string())
            }));
        }

        writeln!(out, "{table}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_round_header(index: usize, out: &mut dyn Write) -> Result<()> {
    if index > 0 {
        writeln!(out, "{ROUND_SEPARATOR}")?;
        writeln!(out)?;
    }
    writeln!(out, "Groupings #{}", index + 1)?;
    writeln!(out)?;
    Ok(())
}

/// Format the pairing matrix as an indexed grid for the shutdown report.
/// Diagonal sentinel cells print as `.`.
pub fn matrix_grid(matrix: &PairMatrix) -> String {
    let mut grid = String::from("   ");
    for col in 0..matrix.size() {
        grid.push_str(&format!(" {col:>2}"));
    }
    grid.push('\n');

    for (row_index, row) in matrix.rows().enumerate() {
        grid.push_str(&format!(" {row_index:>2}"));
        for &cell in row {
            if cell == SELF_SENTINEL {
                grid.push_str("  .");
            } else {
                grid.push_str(&format!("{cell:>3}"));
            }
        }
        grid.push('\n');
    }
    grid
}
