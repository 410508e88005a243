use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::record::GeneRecord;

/// Identifier column addressed by a batch of input ids.
///
/// A batch addresses exactly one column; mixed batches are not supported and
/// detection picks the column that explains the most ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Symbol,
    Ensembl,
    Entrez,
    Uniprot,
}

impl KeyType {
    /// Detection precedence: a tie between columns resolves to the earlier entry.
    pub const PRECEDENCE: [KeyType; 4] =
        [Self::Symbol, Self::Ensembl, Self::Entrez, Self::Uniprot];

    /// The output column this key joins on
    #[must_use]
    pub fn column(self) -> Column {
        match self {
            Self::Symbol => Column::Symbol,
            Self::Ensembl => Column::Ensembl,
            Self::Entrez => Column::Entrez,
            Self::Uniprot => Column::Uniprot,
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column().name())
    }
}

/// A column of the output table.
///
/// Each variant maps to a fixed accessor on [`GeneRecord`]; there is no
/// lookup of columns by dynamically evaluated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Symbol,
    Ensembl,
    Entrez,
    Uniprot,
    Chr,
    Start,
    End,
    GeneBiotype,
    Summary,
}

impl Column {
    /// Canonical display order
    pub const ALL: [Column; 9] = [
        Self::Symbol,
        Self::Ensembl,
        Self::Entrez,
        Self::Uniprot,
        Self::Chr,
        Self::Start,
        Self::End,
        Self::GeneBiotype,
        Self::Summary,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Ensembl => "ensembl",
            Self::Entrez => "entrezid",
            Self::Uniprot => "uniprot",
            Self::Chr => "chr",
            Self::Start => "start",
            Self::End => "end",
            Self::GeneBiotype => "gene_biotype",
            Self::Summary => "summary",
        }
    }

    /// Display value of this column for one record; numeric fields render as text
    #[must_use]
    pub fn display_value(self, record: &GeneRecord) -> Option<String> {
        match self {
            Self::Symbol => Some(record.symbol.clone()),
            Self::Ensembl => record.ensembl.clone(),
            Self::Entrez => record.entrezid.clone(),
            Self::Uniprot => record.uniprot.clone(),
            Self::Chr => record.chr.clone(),
            Self::Start => record.start.map(|v| v.to_string()),
            Self::End => record.end.map(|v| v.to_string()),
            Self::GeneBiotype => record.gene_biotype.clone(),
            Self::Summary => record.summary.clone(),
        }
    }
}

/// Genome build / annotation version (human-specific; other organisms carry
/// a single annotation table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomeBuild {
    V38,
    V19,
}

impl std::fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V38 => write!(f, "v38"),
            Self::V19 => write!(f, "v19"),
        }
    }
}

/// Unrecognized genome build alias
#[derive(Error, Debug)]
#[error("Unknown genome build: '{0}' (expected v38 or v19)")]
pub struct UnknownGenomeBuild(pub String);

impl FromStr for GenomeBuild {
    type Err = UnknownGenomeBuild;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v38" | "38" | "hg38" | "grch38" => Ok(Self::V38),
            "v19" | "19" | "hg19" | "grch37" => Ok(Self::V19),
            _ => Err(UnknownGenomeBuild(s.to_string())),
        }
    }
}
