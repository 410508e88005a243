//! Command-line interface for gene-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve gene or protein identifiers to annotation records
//! - **catalog**: List, show, or export annotation tables from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Resolve symbols against the human GRCh38 annotation
//! gene-solver resolve TP53 BRCA1 EGFR
//!
//! # Pipe identifiers from a file or stdin
//! gene-solver resolve --ids-file ids.txt
//! cut -f1 hits.tsv | gene-solver resolve --ids-file -
//!
//! # Pick one row per id and drop unmatched inputs
//! gene-solver resolve U2AF1 --unique --drop-na
//!
//! # JSON output for scripting
//! gene-solver resolve TP53 --format json
//!
//! # Mouse annotation, hg19 coordinates for human
//! gene-solver resolve Trp53 --organism mouse
//! gene-solver resolve TP53 --build v19
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod resolve;

use crate::resolve::ResolvedTable;

#[derive(Parser)]
#[command(name = "gene-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve gene and protein identifiers against reference annotation tables")]
#[command(
    long_about = "gene-solver resolves gene and protein identifiers (symbols, Ensembl, Entrez, UniProt) against a reference annotation table.\n\nIt detects which identifier type a batch uses, joins it case-insensitively against the annotation for the requested organism and genome build, and produces one output row per input id in input order. One-to-many matches can be collapsed deterministically with --unique."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve gene or protein identifiers to annotation records
    Resolve(resolve::ResolveArgs),

    /// Inspect or export the annotation catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Render a resolved table in the requested format
pub(crate) fn print_table(table: &ResolvedTable, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_table(table),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table.to_json())?),
        OutputFormat::Tsv => print!("{}", table.to_tsv()),
    }
    Ok(())
}

fn print_text_table(table: &ResolvedTable) {
    // Column widths: max of header and cells, with NA standing in for
    // missing values. Long summaries are clipped to keep rows readable.
    const MAX_CELL: usize = 48;

    let cell_text = |cell: &Option<String>| -> String {
        let text = cell.as_deref().unwrap_or("NA");
        if text.chars().count() > MAX_CELL {
            let clipped: String = text.chars().take(MAX_CELL - 3).collect();
            format!("{clipped}...")
        } else {
            text.to_string()
        }
    };

    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (at, cell) in row.iter().enumerate() {
            widths[at] = widths[at].max(cell_text(cell).len());
        }
    }

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{name:width$}"))
        .collect();
    println!("{}", header.join("  "));
    println!("{}", "-".repeat(header.join("  ").len()));

    for row in &table.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:width$}", cell_text(cell)))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
