use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::store::AnnotationCatalog;
use crate::cli::OutputFormat;
use crate::core::types::GenomeBuild;
use crate::resolve::{self, ResolveOptions};

#[derive(Args)]
pub struct ResolveArgs {
    /// Identifiers to resolve (symbols, Ensembl, Entrez, or UniProt ids).
    /// With no ids and no --ids-file, prints the full annotation table.
    pub ids: Vec<String>,

    /// Read identifiers from a file, one per line ("-" for stdin)
    #[arg(long, conflicts_with = "ids")]
    pub ids_file: Option<PathBuf>,

    /// Organism alias (human/hs, mouse/mm, rat/rn, ...)
    #[arg(short, long, default_value = "human")]
    pub organism: String,

    /// Genome build: v38 or v19 (applies to human; other organisms carry a
    /// single annotation)
    #[arg(short, long, default_value = "v38")]
    pub build: String,

    /// Collapse one-to-many matches to a single best row
    #[arg(short, long)]
    pub unique: bool,

    /// Drop rows where every annotation field is NA
    #[arg(long)]
    pub drop_na: bool,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => AnnotationCatalog::load_from_file(path)?,
        None => AnnotationCatalog::load_embedded()?,
    };
    let build: GenomeBuild = args.build.parse()?;

    let ids = gather_ids(&args)?;
    if verbose {
        match &ids {
            Some(ids) => eprintln!(
                "Resolving {} ids against {} ({build})",
                ids.len(),
                args.organism
            ),
            None => eprintln!("No ids supplied; printing the {} ({build}) table", args.organism),
        }
    }

    let options = ResolveOptions {
        unique: args.unique,
        keep_na: !args.drop_na,
    };
    let table = resolve::resolve_ids(&catalog, ids.as_deref(), &args.organism, build, &options)?;

    crate::cli::print_table(&table, format)
}

/// Positional ids, the ids file, or nothing (full-table mode)
fn gather_ids(args: &ResolveArgs) -> anyhow::Result<Option<Vec<String>>> {
    if let Some(path) = &args.ids_file {
        let content = if path == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        };
        let ids: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        return Ok(Some(ids));
    }
    if args.ids.is_empty() {
        return Ok(None);
    }
    Ok(Some(args.ids.clone()))
}
