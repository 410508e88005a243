use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::record::GeneRecord;
use crate::core::table::ReferenceTable;
use crate::core::types::{GenomeBuild, UnknownGenomeBuild};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unknown organism alias: '{0}'")]
    UnknownOrganism(String),

    #[error(transparent)]
    UnknownGenomeBuild(#[from] UnknownGenomeBuild),

    #[error("No annotation table for organism '{organism}' with build {build}")]
    MissingTable {
        organism: String,
        build: GenomeBuild,
    },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub tables: Vec<TableData>,
}

/// One annotation table in the serialized catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    pub organism: String,
    pub build: GenomeBuild,
    pub genes: Vec<GeneRecord>,
}

/// Gene annotation tables keyed by (organism, genome build)
#[derive(Debug, Default)]
pub struct AnnotationCatalog {
    tables: HashMap<(String, GenomeBuild), ReferenceTable>,
}

impl AnnotationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/gene_annotations.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for table in data.tables {
            catalog.add_table(ReferenceTable::new(table.organism, table.build, table.genes));
        }

        Ok(catalog)
    }

    /// Add a table, replacing any existing one for the same (organism, build)
    pub fn add_table(&mut self, table: ReferenceTable) {
        self.tables
            .insert((table.organism.clone(), table.build), table);
    }

    /// Map a caller-supplied organism alias to its canonical catalog key
    pub fn canonical_organism(alias: &str) -> Result<&'static str, CatalogError> {
        match alias.to_lowercase().as_str() {
            "human" | "hs" | "hsa" | "hg" | "homo sapiens" => Ok("human"),
            "mouse" | "mm" | "mmu" | "mus musculus" => Ok("mouse"),
            "rat" | "rn" | "rno" | "rattus norvegicus" => Ok("rat"),
            _ => Err(CatalogError::UnknownOrganism(alias.to_string())),
        }
    }

    /// Annotation table for an organism alias and genome build.
    ///
    /// Genome builds distinguish human annotations only; an organism with a
    /// single table serves that table for either build.
    pub fn table(
        &self,
        organism: &str,
        build: GenomeBuild,
    ) -> Result<&ReferenceTable, CatalogError> {
        let canonical = Self::canonical_organism(organism)?;

        if let Some(table) = self.tables.get(&(canonical.to_string(), build)) {
            return Ok(table);
        }

        if canonical != "human" {
            let other = match build {
                GenomeBuild::V38 => GenomeBuild::V19,
                GenomeBuild::V19 => GenomeBuild::V38,
            };
            if let Some(table) = self.tables.get(&(canonical.to_string(), other)) {
                tracing::debug!(
                    "no {build} table for '{canonical}'; using its {other} annotation"
                );
                return Ok(table);
            }
        }

        Err(CatalogError::MissingTable {
            organism: canonical.to_string(),
            build,
        })
    }

    /// All (organism, build) pairs in the catalog, sorted for stable output
    #[must_use]
    pub fn tables(&self) -> Vec<&ReferenceTable> {
        let mut tables: Vec<&ReferenceTable> = self.tables.values().collect();
        tables.sort_by(|a, b| {
            (a.organism.as_str(), a.build.to_string())
                .cmp(&(b.organism.as_str(), b.build.to_string()))
        });
        tables
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            tables: self
                .tables()
                .into_iter()
                .map(|table| TableData {
                    organism: table.organism.clone(),
                    build: table.build,
                    genes: table.records.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of tables in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
