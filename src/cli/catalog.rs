use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::AnnotationCatalog;
use crate::cli::OutputFormat;
use crate::core::types::GenomeBuild;
use crate::resolve::output;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List annotation tables (organism, build, gene count)
    List,

    /// Show one annotation table in full
    Show {
        /// Organism alias
        #[arg(short, long, default_value = "human")]
        organism: String,

        /// Genome build
        #[arg(short, long, default_value = "v38")]
        build: String,
    },

    /// Export the catalog as JSON
    Export,
}

pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => AnnotationCatalog::load_from_file(path)?,
        None => AnnotationCatalog::load_embedded()?,
    };

    match args.command {
        CatalogCommand::List => list_tables(&catalog, format)?,
        CatalogCommand::Show { organism, build } => {
            let build: GenomeBuild = build.parse()?;
            let table = catalog.table(&organism, build)?;
            crate::cli::print_table(&output::full_table(table), format)?;
        }
        CatalogCommand::Export => println!("{}", catalog.to_json()?),
    }

    Ok(())
}

fn list_tables(catalog: &AnnotationCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{:<10}  {:<6}  {:>6}", "organism", "build", "genes");
            println!("{}", "-".repeat(26));
            for table in catalog.tables() {
                println!(
                    "{:<10}  {:<6}  {:>6}",
                    table.organism,
                    table.build.to_string(),
                    table.len()
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = catalog
                .tables()
                .into_iter()
                .map(|table| {
                    serde_json::json!({
                        "organism": table.organism,
                        "build": table.build.to_string(),
                        "genes": table.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Tsv => {
            println!("organism\tbuild\tgenes");
            for table in catalog.tables() {
                println!("{}\t{}\t{}", table.organism, table.build, table.len());
            }
        }
    }
    Ok(())
}
