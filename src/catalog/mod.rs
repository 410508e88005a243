//! Annotation catalog storage and lookup.
//!
//! The catalog holds gene annotation tables keyed by (organism, genome
//! build). An embedded catalog is compiled into the binary, but custom
//! catalogs can also be loaded from JSON files.
//!
//! ## Organism Aliases
//!
//! Callers address organisms through short aliases:
//!
//! | Canonical | Aliases                        |
//! |-----------|--------------------------------|
//! | human     | hs, hsa, hg, homo sapiens      |
//! | mouse     | mm, mmu, mus musculus          |
//! | rat       | rn, rno, rattus norvegicus     |
//!
//! ## Example
//!
//! ```rust
//! use gene_solver::AnnotationCatalog;
//! use gene_solver::core::types::GenomeBuild;
//!
//! let catalog = AnnotationCatalog::load_embedded().unwrap();
//! let table = catalog.table("hs", GenomeBuild::V38).unwrap();
//! assert!(!table.is_empty());
//! ```
//!
//! ## Custom Catalogs
//!
//! Custom catalogs can be created by exporting and modifying the embedded
//! catalog:
//!
//! ```rust,no_run
//! use gene_solver::AnnotationCatalog;
//! use std::path::Path;
//!
//! let catalog = AnnotationCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = AnnotationCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod store;
