use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oxiorder_core::{Config, Rule};
use oxiorder_import_newlines::ImportNewlines;
use oxiorder_import_sort::ImportSort;
use oxiorder_statement_order::StatementOrder;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxiorder")]
#[command(about = "Keeps imports and exports of JavaScript/TypeScript files in order", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that imports and exports come first, grouped by kind
    StatementOrder(Config),
    /// Check that imports and exports of one kind are sorted by path
    ImportSort(Config),
    /// Check blank lines between groups of imports and exports
    ImportNewlines(Config),
    /// Run every check
    Check(Config),
}

const STATEMENT_ORDER: &dyn Rule = &StatementOrder;
const IMPORT_SORT: &dyn Rule = &ImportSort;
const IMPORT_NEWLINES: &dyn Rule = &ImportNewlines;

impl Commands {
    fn into_parts(self) -> (Config, Vec<&'static dyn Rule>) {
        match self {
            Commands::StatementOrder(cfg) => (cfg, vec![STATEMENT_ORDER]),
            Commands::ImportSort(cfg) => (cfg, vec![IMPORT_SORT]),
            Commands::ImportNewlines(cfg) => (cfg, vec![IMPORT_NEWLINES]),
            Commands::Check(cfg) => (cfg, vec![STATEMENT_ORDER, IMPORT_SORT, IMPORT_NEWLINES]),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    let (cfg, rules) = cli.command.into_parts();
    let num_threads = rayon::current_num_threads();
    let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
    info!("Running {} (using {} threads)", names.join(", "), num_threads);
    debug!(
        "Config: root={:?}, entry_glob={:?}, settings={:?}, no_manifest={}",
        cfg.root, cfg.entry_glob, cfg.settings, cfg.no_manifest
    );

    let result = oxiorder_core::run_check(cfg, &rules)?;
    debug!("Found {} diagnostics", result.total_diagnostics());

    let elapsed_ms = start.elapsed().as_millis();

    if result.total_diagnostics() > 0 {
        oxiorder_core::print_diagnostics_tree(&mut stdout, &result)?;
    } else {
        info!("No issues detected");
        oxiorder_core::print_no_issues_message(&mut stdout, result.files_analyzed)?;
    }

    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} files (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.files_analyzed.to_string().cyan(),
        num_threads.to_string().cyan()
    )?;
    stdout.flush()?;

    if result.total_diagnostics() > 0 {
        // Non-zero exit to fail CI
        std::process::exit(1);
    }

    Ok(())
}
