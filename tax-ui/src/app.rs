use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tax_core::{Income, InvalidInputError, RegimeComparison, RegimeTables};
use tax_data::SlabTableLoader;
use tracing::{debug, info, warn};

use crate::views::{RenderOptions, render_comparison};

/// Prompt shown before each interactive submission.
pub const PROMPT: &str = "Enter your yearly income: ";

/// Returns the slab tables to calculate with.
///
/// Uses the CSV at `slabs` when given, otherwise the built-in tables.
pub fn load_tables(slabs: Option<&Path>) -> Result<RegimeTables> {
    match slabs {
        Some(path) => SlabTableLoader::load_from_file(path)
            .with_context(|| format!("Failed to load slab tables from {}", path.display())),
        None => {
            debug!("using built-in slab tables");
            Ok(RegimeTables::builtin().clone())
        }
    }
}

/// Holds the tables and the most recent comparison for one user.
///
/// Each [`Session::submit`] is one "calculate" action. Invalid income is
/// rejected before any calculation and leaves the previous result in place.
#[derive(Debug, Clone)]
pub struct Session {
    tables: RegimeTables,
    latest: Option<RegimeComparison>,
}

impl Session {
    pub fn new(tables: RegimeTables) -> Self {
        Self {
            tables,
            latest: None,
        }
    }

    pub fn tables(&self) -> &RegimeTables {
        &self.tables
    }

    pub fn latest(&self) -> Option<&RegimeComparison> {
        self.latest.as_ref()
    }

    pub fn submit(
        &mut self,
        input: &str,
    ) -> Result<RegimeComparison, InvalidInputError> {
        let income = Income::parse(input).inspect_err(|error| {
            warn!(input = input.trim(), %error, "skipping calculation for invalid income");
        })?;

        let comparison = RegimeComparison::compare(&income, &self.tables);
        self.latest = Some(comparison);
        Ok(comparison)
    }
}

/// Reads one income per line from `input` and writes each comparison to
/// `output` until EOF or a `q`/`quit` line.
///
/// Blank lines are ignored and invalid lines are skipped. A skipped line
/// writes nothing to `output`; the only trace is the `warn!` event from
/// [`Session::submit`], which is filtered out when logging is set above `warn`.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    options: RenderOptions,
) -> Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read income from input")?;
        let trimmed = line.trim();

        if matches!(trimmed, "q" | "quit") {
            break;
        }

        if !trimmed.is_empty() {
            if let Ok(comparison) = session.submit(trimmed) {
                writeln!(output)?;
                write!(
                    output,
                    "{}",
                    render_comparison(&comparison, session.tables(), options)
                )?;
                writeln!(output)?;
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    info!("session ended");
    Ok(())
}
