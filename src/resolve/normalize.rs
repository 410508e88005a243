//! Input identifier canonicalization.
//!
//! Two transforms run before matching: Ensembl version suffixes are stripped
//! (only when the whole batch looks like Ensembl accessions), and unicode
//! Greek glyphs are replaced with latin tokens so that e.g. `TNFα` matches a
//! reference symbol spelled `TNFalpha`. The inverse transform restores the
//! glyphs in the final `input_id` column.

use std::sync::LazyLock;

use regex::Regex;

/// Greek glyphs and the latin tokens they normalize to.
///
/// Substitution is literal, non-overlapping, and left-to-right. No token is
/// a substring of another, so the order of the pairs does not matter.
const GREEK_LATIN: [(char, &str); 8] = [
    ('α', "alpha"),
    ('β', "beta"),
    ('γ', "gamma"),
    ('δ', "delta"),
    ('ε', "epsilon"),
    ('λ', "lambda"),
    ('κ', "kappa"),
    ('σ', "sigma"),
];

/// Versioned or unversioned Ensembl accession (e.g. `ENSG00000141510.2`,
/// `ENSMUSG00000059552`)
static ENSEMBL_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ENS[A-Z]*[GTPE]\d+(\.\d+)?$").expect("valid pattern"));

/// Whether an upper-cased id parses as an Ensembl accession
pub(crate) fn is_ensembl_accession(id: &str) -> bool {
    ENSEMBL_ACCESSION.is_match(id)
}

/// Canonicalize a batch of raw identifiers for matching.
///
/// Version suffixes are stripped only when **every** id in the batch is an
/// Ensembl accession; a mixed batch keeps dots untouched (a symbol such as
/// `NKX2.1` must not lose its tail).
#[must_use]
pub fn normalize_ids(ids: &[String]) -> Vec<String> {
    let all_ensembl = !ids.is_empty() && ids.iter().all(|id| is_ensembl_accession(id));
    ids.iter()
        .map(|id| {
            let id = if all_ensembl { strip_version(id) } else { id.as_str() };
            latinize_greek(id)
        })
        .collect()
}

/// Drop a trailing dot-introduced version suffix
fn strip_version(id: &str) -> &str {
    match id.find('.') {
        Some(dot) => &id[..dot],
        None => id,
    }
}

/// Replace each supported Greek glyph with its latin token
#[must_use]
pub fn latinize_greek(id: &str) -> String {
    let mut out = id.to_string();
    for (glyph, token) in GREEK_LATIN {
        if out.contains(glyph) {
            out = out.replace(glyph, token);
        }
    }
    out
}

/// Restore Greek glyphs in a display identifier.
///
/// This is a blind substring substitution: an identifier that merely
/// contains one of the latin tokens (e.g. `beta2`) is rewritten as well.
/// Kept as-is for parity with long-standing behavior; callers needing
/// word-boundary-safe restoration must handle that themselves.
#[must_use]
pub fn restore_greek(id: &str) -> String {
    let mut out = id.to_string();
    for (glyph, token) in GREEK_LATIN {
        if out.contains(token) {
            out = out.replace(token, &glyph.to_string());
        }
    }
    out
}
