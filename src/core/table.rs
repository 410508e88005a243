use std::collections::HashMap;

use crate::core::record::GeneRecord;
use crate::core::types::{Column, GenomeBuild, KeyType};

/// Which optional columns carry at least one value in a table.
///
/// Catalogs for some organisms lack entrez, chromosome, or summary data;
/// ambiguity resolution degrades through its fallback rules accordingly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnPresence {
    pub ensembl: bool,
    pub entrezid: bool,
    pub uniprot: bool,
    pub chr: bool,
    pub start: bool,
    pub end: bool,
    pub gene_biotype: bool,
    pub summary: bool,
}

impl ColumnPresence {
    #[must_use]
    pub fn has(self, column: Column) -> bool {
        match column {
            Column::Symbol => true,
            Column::Ensembl => self.ensembl,
            Column::Entrez => self.entrezid,
            Column::Uniprot => self.uniprot,
            Column::Chr => self.chr,
            Column::Start => self.start,
            Column::End => self.end,
            Column::GeneBiotype => self.gene_biotype,
            Column::Summary => self.summary,
        }
    }
}

/// Reference annotation table for one (organism, genome build) pair.
///
/// Row numbers are positions in `records`: unique, dense, and stable for the
/// lifetime of the table. The table is read-only once built; a resolution
/// call never mutates it.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    /// Canonical organism key (e.g. "human")
    pub organism: String,

    /// Genome build this table annotates
    pub build: GenomeBuild,

    /// All gene records, in catalog order
    pub records: Vec<GeneRecord>,

    columns: ColumnPresence,

    // Lowercased identifier -> row numbers, one index per key column
    symbol_index: HashMap<String, Vec<usize>>,
    ensembl_index: HashMap<String, Vec<usize>>,
    entrez_index: HashMap<String, Vec<usize>>,
    uniprot_index: HashMap<String, Vec<usize>>,
}

impl ReferenceTable {
    pub fn new(
        organism: impl Into<String>,
        build: GenomeBuild,
        mut records: Vec<GeneRecord>,
    ) -> Self {
        for record in &mut records {
            record.sanitize();
        }
        let mut table = Self {
            organism: organism.into(),
            build,
            records,
            columns: ColumnPresence::default(),
            symbol_index: HashMap::new(),
            ensembl_index: HashMap::new(),
            entrez_index: HashMap::new(),
            uniprot_index: HashMap::new(),
        };
        table.rebuild_indexes();
        table
    }

    /// Rebuild the per-key indexes and column presence after modifying records
    pub fn rebuild_indexes(&mut self) {
        self.symbol_index.clear();
        self.ensembl_index.clear();
        self.entrez_index.clear();
        self.uniprot_index.clear();
        self.columns = ColumnPresence::default();

        for (rnum, record) in self.records.iter().enumerate() {
            self.symbol_index
                .entry(record.symbol.to_lowercase())
                .or_default()
                .push(rnum);
            if let Some(ensembl) = &record.ensembl {
                self.ensembl_index
                    .entry(ensembl.to_lowercase())
                    .or_default()
                    .push(rnum);
            }
            if let Some(entrezid) = &record.entrezid {
                self.entrez_index
                    .entry(entrezid.to_lowercase())
                    .or_default()
                    .push(rnum);
            }
            if let Some(uniprot) = &record.uniprot {
                self.uniprot_index
                    .entry(uniprot.to_lowercase())
                    .or_default()
                    .push(rnum);
            }

            self.columns.ensembl |= record.ensembl.is_some();
            self.columns.entrezid |= record.entrezid.is_some();
            self.columns.uniprot |= record.uniprot.is_some();
            self.columns.chr |= record.chr.is_some();
            self.columns.start |= record.start.is_some();
            self.columns.end |= record.end.is_some();
            self.columns.gene_biotype |= record.gene_biotype.is_some();
            self.columns.summary |= record.summary.is_some();
        }
    }

    /// Rows whose `key` column equals `needle` (already lowercased), in
    /// catalog order. Empty when nothing matches.
    #[must_use]
    pub fn rows_for(&self, key: KeyType, needle: &str) -> &[usize] {
        let index = match key {
            KeyType::Symbol => &self.symbol_index,
            KeyType::Ensembl => &self.ensembl_index,
            KeyType::Entrez => &self.entrez_index,
            KeyType::Uniprot => &self.uniprot_index,
        };
        index.get(needle).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn columns(&self) -> ColumnPresence {
        self.columns
    }

    /// Number of gene records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_table() -> ReferenceTable {
        ReferenceTable::new(
            "human",
            GenomeBuild::V38,
            vec![
                GeneRecord::new("TP53")
                    .with_ensembl("ENSG00000141510")
                    .with_entrez("7157")
                    .with_uniprot("P04637"),
                GeneRecord::new("BRCA1")
                    .with_ensembl("ENSG00000012048")
                    .with_entrez("672"),
                GeneRecord::new("U2AF1").with_ensembl("ENSG00000160201"),
                GeneRecord::new("U2AF1").with_ensembl("ENSG00000275895"),
            ],
        )
    }

    #[test]
    fn test_rows_for_case_insensitive() {
        let table = make_test_table();
        assert_eq!(table.rows_for(KeyType::Symbol, "tp53"), &[0]);
        assert_eq!(table.rows_for(KeyType::Ensembl, "ensg00000012048"), &[1]);
        assert_eq!(table.rows_for(KeyType::Uniprot, "p04637"), &[0]);
    }

    #[test]
    fn test_rows_for_duplicate_symbol() {
        let table = make_test_table();
        assert_eq!(table.rows_for(KeyType::Symbol, "u2af1"), &[2, 3]);
    }

    #[test]
    fn test_rows_for_unmatched() {
        let table = make_test_table();
        assert!(table.rows_for(KeyType::Symbol, "fakeid").is_empty());
    }

    #[test]
    fn test_column_presence() {
        let table = make_test_table();
        let columns = table.columns();
        assert!(columns.has(Column::Symbol));
        assert!(columns.has(Column::Ensembl));
        assert!(columns.has(Column::Entrez));
        assert!(!columns.has(Column::Chr));
        assert!(!columns.has(Column::Summary));
    }

    #[test]
    fn test_new_sanitizes_records() {
        let table = ReferenceTable::new(
            "human",
            GenomeBuild::V38,
            vec![GeneRecord::new("TP53").with_uniprot("")],
        );
        assert_eq!(table.records[0].uniprot, None);
        assert!(!table.columns().has(Column::Uniprot));
    }
}
