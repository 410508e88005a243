//! The identifier resolution engine.
//!
//! Resolution runs as a fixed pipeline over one input batch:
//!
//! 1. **Normalize** ([`normalize`]): strip Ensembl version suffixes, map
//!    Greek glyphs to latin tokens
//! 2. **Detect** ([`detect`]): infer which identifier column the batch
//!    addresses
//! 3. **Join** ([`join`]): left outer join driven by the input sequence,
//!    preserving order and multiplicity
//! 4. **Disambiguate** ([`ambiguity`]): collapse one-to-many matches via a
//!    deterministic tie-break cascade (only when requested)
//! 5. **Assemble** ([`output`]): reattach original inputs, filter rows and
//!    columns, restore Greek glyphs
//!
//! ## Example
//!
//! ```rust
//! use gene_solver::{AnnotationCatalog, GenomeBuild, ResolveOptions};
//!
//! let catalog = AnnotationCatalog::load_embedded().unwrap();
//! let ids = vec!["TP53".to_string(), "brca1".to_string(), "NOT_A_GENE".to_string()];
//!
//! let table = gene_solver::resolve_ids(
//!     &catalog,
//!     Some(&ids),
//!     "human",
//!     GenomeBuild::V38,
//!     &ResolveOptions::default(),
//! )
//! .unwrap();
//!
//! // One output row per input, in input order; unmatched ids are NA-filled.
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.get(0, "ensembl"), Some("ENSG00000141510"));
//! assert_eq!(table.get(2, "ensembl"), None);
//! ```

pub mod ambiguity;
pub mod detect;
pub mod join;
pub mod normalize;
pub mod output;

use thiserror::Error;

use crate::catalog::store::{AnnotationCatalog, CatalogError};
use crate::core::table::ReferenceTable;
use crate::core::types::GenomeBuild;

pub use output::ResolvedTable;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No identifier column matches the supplied ids (sample: {sample:?})")]
    InvalidKeyType { sample: Vec<String> },

    #[error("Input id list is empty")]
    EmptyInput,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Options controlling one resolution call
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Collapse one-to-many matches to a single row via the tie-break cascade
    pub unique: bool,

    /// Keep rows whose every annotation field is NA. Defaults to true: an
    /// input id is never silently dropped unless the caller opts in.
    pub keep_na: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            unique: false,
            keep_na: true,
        }
    }
}

/// Resolve a batch of raw identifiers against a reference table.
///
/// The output is aligned 1:1 with the input order (including duplicate
/// runs) when `keep_na` is set; unmatched ids become NA-filled rows.
/// `ids = None` returns the full reference table in row order with no
/// input-alignment logic.
pub fn resolve(
    ids: Option<&[String]>,
    table: &ReferenceTable,
    options: &ResolveOptions,
) -> Result<ResolvedTable, ResolveError> {
    let Some(ids) = ids else {
        return Ok(output::full_table(table));
    };
    if ids.is_empty() {
        return Err(ResolveError::EmptyInput);
    }

    let normalized = normalize::normalize_ids(ids);
    let queries: Vec<String> = normalized.iter().map(|id| id.to_lowercase()).collect();

    let key = detect::detect_key_type(&queries, table).ok_or_else(|| {
        ResolveError::InvalidKeyType {
            sample: ids.iter().take(5).cloned().collect(),
        }
    })?;
    tracing::debug!("detected key type '{key}' for a batch of {} ids", ids.len());

    let mut candidates = join::join_candidates(&normalized, &queries, key, table);

    let ambiguous = ambiguity::ambiguous_ids(&candidates);
    if let Some(notice) = ambiguity::ambiguity_notice(&ambiguous) {
        tracing::info!("{notice}");
    }
    if options.unique {
        ambiguity::disambiguate(&mut candidates, table, key);
    }

    Ok(output::assemble(table, key, &candidates, options.keep_na))
}

/// Resolve against a catalog: map the organism alias, select the build, and
/// run [`resolve`] over the loaded table.
pub fn resolve_ids(
    catalog: &AnnotationCatalog,
    ids: Option<&[String]>,
    organism: &str,
    build: GenomeBuild,
    options: &ResolveOptions,
) -> Result<ResolvedTable, ResolveError> {
    let table = catalog.table(organism, build)?;
    resolve(ids, table, options)
}
