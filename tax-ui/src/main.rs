use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_ui::{RenderOptions, Session, app, logging, render_comparison};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian income tax calculator comparing the old and new regimes.
///
/// Computes progressive slab tax on a yearly income under both regimes and
/// prints the tax, salary after tax and the difference between them.
#[derive(Debug, Parser)]
#[command(name = "india-tax", version)]
struct Cli {
    /// Yearly income (e.g. `1500000` or `15,00,000`).
    /// When omitted, incomes are read from stdin one per line.
    #[arg(allow_hyphen_values = true)]
    income: Option<String>,

    /// CSV file with `regime,upper_bound,rate_percent` rows replacing the
    /// built-in slab tables.
    #[arg(long)]
    slabs: Option<PathBuf>,

    /// Show the tax charged in each slab.
    #[arg(long, default_value_t = false)]
    breakdown: bool,

    /// Log level or filter directive; `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let tables = app::load_tables(cli.slabs.as_deref())?;
    let mut session = Session::new(tables);
    let options = RenderOptions {
        breakdown: cli.breakdown,
    };

    match cli.income {
        Some(income) => {
            debug!("single calculation");
            let comparison = session
                .submit(&income)
                .with_context(|| format!("cannot calculate tax for '{income}'"))?;
            print!(
                "{}",
                render_comparison(&comparison, session.tables(), options)
            );
        }
        None => {
            debug!("interactive session");
            app::run_interactive(&mut session, io::stdin().lock(), io::stdout().lock(), options)?;
        }
    }

    Ok(())
}
