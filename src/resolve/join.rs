//! The order-preserving join between an input batch and the reference table.

use crate::core::table::ReferenceTable;
use crate::core::types::KeyType;

/// One input position joined against the reference: zero, one, or many rows.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    /// The caller-visible token: normalized (version-stripped, latinized)
    /// but with the caller's original casing
    pub input_id: String,

    /// Normalized, lowercased form used for matching
    pub query: String,

    /// Matched row numbers in catalog order; empty for an unmatched id
    pub rows: Vec<usize>,
}

/// Left outer join driven by the input sequence.
///
/// Every input id yields exactly one candidate, in input order, so output
/// alignment (including duplicate runs) falls out of construction: the rank
/// key is the input position itself, and no post-hoc position lookup is
/// needed to restore the caller's ordering.
#[must_use]
pub fn join_candidates(
    display_ids: &[String],
    queries: &[String],
    key: KeyType,
    table: &ReferenceTable,
) -> Vec<MatchCandidate> {
    display_ids
        .iter()
        .zip(queries)
        .map(|(input_id, query)| MatchCandidate {
            input_id: input_id.clone(),
            query: query.clone(),
            rows: table.rows_for(key, query).to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::GeneRecord;
    use crate::core::types::GenomeBuild;

    fn make_test_table() -> ReferenceTable {
        ReferenceTable::new(
            "human",
            GenomeBuild::V38,
            vec![
                GeneRecord::new("TP53").with_ensembl("ENSG00000141510"),
                GeneRecord::new("BRCA1").with_ensembl("ENSG00000012048"),
                GeneRecord::new("U2AF1").with_ensembl("ENSG00000160201"),
                GeneRecord::new("U2AF1").with_ensembl("ENSG00000275895"),
            ],
        )
    }

    fn join(tokens: &[&str], table: &ReferenceTable) -> Vec<MatchCandidate> {
        let originals: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        let queries: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        join_candidates(&originals, &queries, KeyType::Symbol, table)
    }

    #[test]
    fn test_input_order_and_multiplicity_preserved() {
        let table = make_test_table();
        let candidates = join(&["BRCA1", "TP53", "BRCA1"], &table);

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].rows, vec![1]);
        assert_eq!(candidates[1].rows, vec![0]);
        assert_eq!(candidates[2].rows, vec![1]);
    }

    #[test]
    fn test_unmatched_id_keeps_its_position() {
        let table = make_test_table();
        let candidates = join(&["TP53", "FAKEID", "BRCA1"], &table);

        assert_eq!(candidates[1].input_id, "FAKEID");
        assert!(candidates[1].rows.is_empty());
    }

    #[test]
    fn test_one_to_many_symbol() {
        let table = make_test_table();
        let candidates = join(&["U2AF1"], &table);
        assert_eq!(candidates[0].rows, vec![2, 3]);
    }
}
