use serde::{Deserialize, Deserializer, Serialize};

/// A single gene in a reference annotation table.
///
/// Every field except `symbol` is optional. Absence is always the explicit
/// `None` marker, never an empty string; [`GeneRecord::sanitize`] enforces
/// this for records loaded from external catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    /// Human-readable gene name (e.g. "TP53")
    pub symbol: String,

    /// Ensembl gene accession, unversioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensembl: Option<String>,

    /// NCBI Entrez gene id. Numeric at NCBI but carried textually here;
    /// catalogs may store it as a JSON number or string.
    #[serde(
        default,
        deserialize_with = "entrez_from_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrezid: Option<String>,

    /// UniProt protein accession
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniprot: Option<String>,

    /// Chromosome name, without a "chr" prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chr: Option<String>,

    /// Genomic start coordinate (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,

    /// Genomic end coordinate (1-based, inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,

    /// Biotype (e.g. `protein_coding`, `lncRNA`, `miRNA`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_biotype: Option<String>,

    /// Free-text functional summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl GeneRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ensembl: None,
            entrezid: None,
            uniprot: None,
            chr: None,
            start: None,
            end: None,
            gene_biotype: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_ensembl(mut self, ensembl: impl Into<String>) -> Self {
        self.ensembl = Some(ensembl.into());
        self
    }

    #[must_use]
    pub fn with_entrez(mut self, entrezid: impl Into<String>) -> Self {
        self.entrezid = Some(entrezid.into());
        self
    }

    #[must_use]
    pub fn with_uniprot(mut self, uniprot: impl Into<String>) -> Self {
        self.uniprot = Some(uniprot.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, chr: impl Into<String>, start: u64, end: u64) -> Self {
        self.chr = Some(chr.into());
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn with_chr(mut self, chr: impl Into<String>) -> Self {
        self.chr = Some(chr.into());
        self
    }

    #[must_use]
    pub fn with_biotype(mut self, gene_biotype: impl Into<String>) -> Self {
        self.gene_biotype = Some(gene_biotype.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Normalize empty strings to the explicit no-value marker
    pub fn sanitize(&mut self) {
        for field in [
            &mut self.ensembl,
            &mut self.entrezid,
            &mut self.uniprot,
            &mut self.chr,
            &mut self.gene_biotype,
            &mut self.summary,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
    }

    /// Number of optional fields carrying no value.
    /// The first tie-break in ambiguity resolution.
    #[must_use]
    pub fn na_count(&self) -> usize {
        [
            self.ensembl.is_none(),
            self.entrezid.is_none(),
            self.uniprot.is_none(),
            self.chr.is_none(),
            self.start.is_none(),
            self.end.is_none(),
            self.gene_biotype.is_none(),
            self.summary.is_none(),
        ]
        .into_iter()
        .filter(|&missing| missing)
        .count()
    }

    /// Entrez id parsed as a number, when present and numeric
    #[must_use]
    pub fn entrez_numeric(&self) -> Option<i64> {
        self.entrezid.as_deref().and_then(|id| id.parse().ok())
    }
}

/// Accept an Entrez id as either a JSON number or string
fn entrez_from_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(if s.is_empty() { None } else { Some(s) }),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid entrezid value: {other}"
        ))),
    }
}
