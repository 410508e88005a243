//! # gene-solver
//!
//! A library for resolving gene and protein identifiers against reference
//! annotation tables.
//!
//! Gene lists arriving from collaborators rarely come clean: symbols mix
//! casing (`tp53`, `TP53`), Ensembl accessions carry version suffixes
//! (`ENSG00000141510.2`), Greek letters appear as unicode glyphs (`TNFα`),
//! ids repeat, and some match several annotation rows at once.
//!
//! `gene-solver` resolves such a list against the annotation table for an
//! organism and genome build, producing one output row per input id in input
//! order, with a deterministic tie-break cascade for one-to-many matches.
//!
//! ## Features
//!
//! - **Key-type detection**: Infers whether a batch holds symbols, Ensembl,
//!   Entrez, or UniProt ids
//! - **Order preservation**: Output rows align 1:1 with the input, including
//!   duplicate runs
//! - **Case-insensitive matching**: The caller's casing survives only in the
//!   `input_id` column
//! - **Deterministic disambiguation**: A documented tie-break cascade picks
//!   one row per ambiguous id
//! - **Greek-letter handling**: `TNFα` matches `TNFalpha` and is restored on
//!   output
//! - **Never drops an input**: Unmatched ids become NA rows unless the
//!   caller opts out
//!
//! ## Example
//!
//! ```rust
//! use gene_solver::{AnnotationCatalog, GenomeBuild, ResolveOptions};
//!
//! // Load the embedded annotation catalog
//! let catalog = AnnotationCatalog::load_embedded().unwrap();
//!
//! // Resolve a messy batch of symbols
//! let ids = vec!["tp53".to_string(), "BRCA1".to_string(), "UNKNOWN_9".to_string()];
//! let table = gene_solver::resolve_ids(
//!     &catalog,
//!     Some(&ids),
//!     "human",
//!     GenomeBuild::V38,
//!     &ResolveOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.get(0, "ensembl"), Some("ENSG00000141510"));
//! assert_eq!(table.get(2, "ensembl"), None); // unmatched, kept as NA
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Annotation catalog storage and organism/build lookup
//! - [`core`]: Core data types for gene records, tables, and identifier keys
//! - [`resolve`]: The resolution engine (normalize, detect, join,
//!   disambiguate, assemble)
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod resolve;

// Re-export commonly used types for convenience
pub use catalog::store::{AnnotationCatalog, CatalogError};
pub use core::record::GeneRecord;
pub use core::table::ReferenceTable;
pub use core::types::{Column, GenomeBuild, KeyType};
pub use resolve::{resolve, resolve_ids, ResolveError, ResolveOptions, ResolvedTable};
