//! Key-type inference for an input batch.

use std::collections::HashSet;

use crate::core::table::ReferenceTable;
use crate::core::types::KeyType;
use crate::resolve::normalize;

/// Infer which identifier column explains a batch of normalized, lowercased
/// ids.
///
/// Each id is tested against the four identifier columns; the column with
/// the highest count of exact matches wins, with ties resolving to the
/// earlier entry in [`KeyType::PRECEDENCE`]. A batch with no reference hits
/// at all is classified by the shape of its ids instead, so fully unmatched
/// input still flows through the join and comes back as NA rows. Returns
/// `None` only when zero columns match and the ids mix shapes — no single
/// key type can explain such a batch, and the caller surfaces that as a
/// hard error since the join requires one key type for the whole batch.
#[must_use]
pub fn detect_key_type(queries: &[String], table: &ReferenceTable) -> Option<KeyType> {
    let mut best: Option<(KeyType, usize)> = None;
    for key in KeyType::PRECEDENCE {
        let hits = queries
            .iter()
            .filter(|query| !table.rows_for(key, query).is_empty())
            .count();
        if hits > 0 && best.map_or(true, |(_, count)| hits > count) {
            best = Some((key, hits));
        }
    }
    best.map(|(key, _)| key).or_else(|| batch_shape(queries))
}

/// The key type a zero-hit batch addresses, judged by id shape alone
fn batch_shape(queries: &[String]) -> Option<KeyType> {
    let shapes: HashSet<KeyType> = queries.iter().map(|id| id_shape(id)).collect();
    if shapes.len() == 1 {
        shapes.into_iter().next()
    } else {
        None
    }
}

fn id_shape(id: &str) -> KeyType {
    if normalize::is_ensembl_accession(&id.to_uppercase()) {
        KeyType::Ensembl
    } else if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        KeyType::Entrez
    } else {
        KeyType::Symbol
    }
}
