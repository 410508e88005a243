//! Core data types for gene identifier resolution.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`GeneRecord`]: A single gene with its identifiers and annotation fields
//! - [`ReferenceTable`]: An annotation table for one (organism, build) pair,
//!   with case-insensitive per-key indexes
//! - [`KeyType`]: The identifier column a batch of input ids addresses
//! - [`Column`], [`GenomeBuild`]: Output column and genome build enums
//!
//! ## Identifier Keys
//!
//! Input batches address exactly one identifier column:
//!
//! | Key      | Example         |
//! |----------|-----------------|
//! | symbol   | TP53            |
//! | ensembl  | ENSG00000141510 |
//! | entrezid | 7157            |
//! | uniprot  | P04637          |
//!
//! Matching is **case-insensitive** everywhere; the caller's original casing
//! is preserved only in the `input_id` column of the output.
//!
//! [`GeneRecord`]: record::GeneRecord
//! [`ReferenceTable`]: table::ReferenceTable
//! [`KeyType`]: types::KeyType
//! [`Column`]: types::Column
//! [`GenomeBuild`]: types::GenomeBuild

pub mod record;
pub mod table;
pub mod types;
