//! Deterministic resolution of one-to-many matches.
//!
//! When a single input id matches several reference rows, a tie-break
//! cascade picks exactly one. The cascade, first successful rule wins:
//!
//! 1. **Fewest NA**: the candidate with strictly the fewest missing fields
//! 2. **Exact symbol**: for symbol batches, candidates whose symbol equals
//!    the queried token; among those, a unique non-NA summary settles it
//! 3. **Minimal Entrez**: the lowest numeric Entrez id, preferring a real
//!    chromosome when several share the minimum (needs entrez + chr data)
//! 4. **Chromosome fallback**: when Entrez ids cannot separate candidates
//!    (or no Entrez data exists), the first one sitting on a real chromosome
//! 5. **Lowest Entrez fallback**: without chromosome data, the lowest
//!    parseable Entrez id when NA counts tie across the pool, else the
//!    first fewest-NA candidate
//!
//! Repeated *inputs* are never ambiguity: each occurrence of a duplicated
//! input carries its own candidate, so only the per-candidate row count
//! matters here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::table::ReferenceTable;
use crate::core::types::KeyType;
use crate::resolve::join::MatchCandidate;

/// A "real" chromosome: numeric, or X/Y optionally followed by more
/// characters. Scaffolds and patches (e.g. `KI270713.1`) do not match.
static REAL_CHROMOSOME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+|X|Y)").expect("valid pattern"));

/// Distinct input ids that matched more than one reference row, in first
/// occurrence order.
#[must_use]
pub fn ambiguous_ids(candidates: &[MatchCandidate]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in candidates {
        if candidate.rows.len() > 1 && seen.insert(candidate.query.clone()) {
            out.push(candidate.input_id.clone());
        }
    }
    out
}

/// Informational notice naming up to three ambiguous ids, with an ellipsis
/// marker beyond that; `None` when the batch has no ambiguity.
#[must_use]
pub fn ambiguity_notice(ambiguous: &[String]) -> Option<String> {
    if ambiguous.is_empty() {
        return None;
    }
    let shown = ambiguous
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let marker = if ambiguous.len() > 3 { " ..." } else { "" };
    Some(format!(
        "{} input id{} matched multiple records: {shown}{marker}",
        ambiguous.len(),
        if ambiguous.len() == 1 { "" } else { "s" },
    ))
}

/// Collapse every one-to-many candidate to a single row via the tie-break
/// cascade. Deterministic: the same inputs always pick the same row.
pub fn disambiguate(candidates: &mut [MatchCandidate], table: &ReferenceTable, key: KeyType) {
    for candidate in candidates.iter_mut() {
        if candidate.rows.len() > 1 {
            candidate.rows = vec![pick_row(table, key, &candidate.query, &candidate.rows)];
        }
    }
}

/// The tie-break cascade for one ambiguous id
fn pick_row(table: &ReferenceTable, key: KeyType, query: &str, rows: &[usize]) -> usize {
    // Rule 1: a strictly smallest NA count wins outright.
    let na_counts: Vec<usize> = rows.iter().map(|&r| table.records[r].na_count()).collect();
    // Safety: rows is non-empty, callers only pass one-to-many candidates
    let min_na = *na_counts.iter().min().expect("rows is non-empty");
    if na_counts.iter().filter(|&&count| count == min_na).count() == 1 {
        let at = na_counts
            .iter()
            .position(|&count| count == min_na)
            .expect("minimum exists");
        return rows[at];
    }

    let mut pool: Vec<usize> = rows.to_vec();

    // Rule 2: exact symbol match, then summary presence. An unresolved
    // exact match narrows the pool for the rules below.
    if key == KeyType::Symbol {
        let exact: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&r| table.records[r].symbol.eq_ignore_ascii_case(query))
            .collect();
        if exact.len() == 1 {
            return exact[0];
        }
        if exact.len() > 1 {
            let with_summary: Vec<usize> = exact
                .iter()
                .copied()
                .filter(|&r| table.records[r].summary.is_some())
                .collect();
            if with_summary.len() == 1 {
                return with_summary[0];
            }
            pool = exact;
        }
    }

    let columns = table.columns();

    // Rules 3 and 4: minimal Entrez id with real-chromosome preference,
    // when both columns carry values.
    if columns.entrezid && columns.chr {
        let numeric: Vec<(usize, i64)> = pool
            .iter()
            .copied()
            .filter_map(|r| table.records[r].entrez_numeric().map(|n| (r, n)))
            .collect();
        let distinct: HashSet<i64> = numeric.iter().map(|&(_, n)| n).collect();
        if distinct.len() > 1 {
            // Safety: more than one distinct value implies numeric is non-empty
            let min = numeric
                .iter()
                .map(|&(_, n)| n)
                .min()
                .expect("numeric is non-empty");
            let mins: Vec<usize> = numeric
                .iter()
                .filter(|&&(_, n)| n == min)
                .map(|&(r, _)| r)
                .collect();
            if mins.len() == 1 {
                return mins[0];
            }
            return first_real_chromosome(table, &mins).unwrap_or(mins[0]);
        }
        // Entrez ids all equal or all absent among the pool.
        return first_real_chromosome(table, &pool).unwrap_or(pool[0]);
    }

    // Rule 4 without Entrez data: chromosome preference still applies.
    if columns.chr {
        return first_real_chromosome(table, &pool).unwrap_or(pool[0]);
    }

    // Rule 5: no chromosome data to consult. Entrez ordering applies only
    // when NA counts tie across the pool; an untied pool resolves to its
    // first fewest-NA candidate instead.
    let pool_nas: Vec<usize> = pool.iter().map(|&r| table.records[r].na_count()).collect();
    // Safety: pool is non-empty
    let min_pool_na = *pool_nas.iter().min().expect("pool is non-empty");
    if pool_nas.iter().any(|&count| count != min_pool_na) {
        let at = pool_nas
            .iter()
            .position(|&count| count == min_pool_na)
            .expect("minimum exists");
        return pool[at];
    }
    pool.iter()
        .copied()
        .min_by_key(|&r| table.records[r].entrez_numeric().unwrap_or(i64::MAX))
        .expect("pool is non-empty")
}

/// First candidate whose chromosome matches the real-chromosome pattern
fn first_real_chromosome(table: &ReferenceTable, rows: &[usize]) -> Option<usize> {
    rows.iter()
        .copied()
        .find(|&r| {
            table.records[r]
                .chr
                .as_deref()
                .is_some_and(|chr| REAL_CHROMOSOME.is_match(chr))
        })
}
