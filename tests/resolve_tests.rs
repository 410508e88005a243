//! End-to-end resolution tests over the embedded annotation catalog.

use gene_solver::{AnnotationCatalog, GenomeBuild, ResolveError, ResolveOptions};

fn ids(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

fn catalog() -> AnnotationCatalog {
    AnnotationCatalog::load_embedded().unwrap()
}

fn resolve_human(
    tokens: &[&str],
    options: &ResolveOptions,
) -> Result<gene_solver::ResolvedTable, ResolveError> {
    let input = ids(tokens);
    gene_solver::resolve_ids(&catalog(), Some(&input), "human", GenomeBuild::V38, options)
}

#[test]
fn test_output_length_matches_input_length() {
    let table = resolve_human(
        &["TP53", "BRCA1", "TP53", "NOT_A_GENE", "EGFR"],
        &ResolveOptions::default(),
    )
    .unwrap();

    assert_eq!(table.len(), 5);
    let inputs: Vec<_> = (0..table.len())
        .map(|row| table.get(row, "input_id").unwrap().to_string())
        .collect();
    assert_eq!(inputs, vec!["TP53", "BRCA1", "TP53", "NOT_A_GENE", "EGFR"]);
}

#[test]
fn test_case_insensitive_resolution_modulo_input_id() {
    let options = ResolveOptions::default();
    let lower = resolve_human(&["tp53"], &options).unwrap();
    let upper = resolve_human(&["TP53"], &options).unwrap();
    let mixed = resolve_human(&["Tp53"], &options).unwrap();

    for column in ["symbol", "ensembl", "entrezid", "uniprot", "chr"] {
        assert_eq!(lower.get(0, column), upper.get(0, column));
        assert_eq!(lower.get(0, column), mixed.get(0, column));
    }
    assert_eq!(lower.get(0, "input_id"), Some("tp53"));
    assert_eq!(upper.get(0, "input_id"), Some("TP53"));
    assert_eq!(mixed.get(0, "input_id"), Some("Tp53"));
}

#[test]
fn test_versioned_ensembl_batch() {
    let table = resolve_human(
        &["ENSG00000141510.2", "ENSG00000012048.15"],
        &ResolveOptions::default(),
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "symbol"), Some("TP53"));
    assert_eq!(table.get(1, "symbol"), Some("BRCA1"));
    // The ensembl column is the join key and is dropped; input_id carries
    // the version-stripped accession.
    assert!(table.column_index("ensembl").is_none());
    assert_eq!(table.get(0, "input_id"), Some("ENSG00000141510"));
}

#[test]
fn test_entrez_and_uniprot_batches() {
    let by_entrez = resolve_human(&["7157", "672"], &ResolveOptions::default()).unwrap();
    assert_eq!(by_entrez.get(0, "symbol"), Some("TP53"));
    assert_eq!(by_entrez.get(1, "symbol"), Some("BRCA1"));
    assert!(by_entrez.column_index("entrezid").is_none());

    let by_uniprot = resolve_human(&["P04637", "p38398"], &ResolveOptions::default()).unwrap();
    assert_eq!(by_uniprot.get(0, "symbol"), Some("TP53"));
    assert_eq!(by_uniprot.get(1, "symbol"), Some("BRCA1"));
    assert!(by_uniprot.column_index("uniprot").is_none());
}

#[test]
fn test_single_unmatched_id_returns_na_row() {
    let table = resolve_human(&["FAKEID_NOT_REAL"], &ResolveOptions::default()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "input_id"), Some("FAKEID_NOT_REAL"));
    for column in ["symbol", "ensembl", "entrezid", "chr", "summary"] {
        assert_eq!(table.get(0, column), None);
    }
}

#[test]
fn test_unmatched_id_policy() {
    let kept = resolve_human(&["TP53", "FAKEID_NOT_REAL"], &ResolveOptions::default()).unwrap();
    assert_eq!(kept.len(), 2);
    assert_eq!(kept.get(1, "input_id"), Some("FAKEID_NOT_REAL"));
    for column in ["symbol", "ensembl", "entrezid", "chr", "summary"] {
        assert_eq!(kept.get(1, column), None);
    }

    let dropped = resolve_human(
        &["TP53", "FAKEID_NOT_REAL"],
        &ResolveOptions {
            keep_na: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped.get(0, "input_id"), Some("TP53"));
}

#[test]
fn test_duplicated_grch38_symbol_expands_without_unique() {
    let table = resolve_human(&["U2AF1"], &ResolveOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_duplicated_grch38_symbol_collapses_with_unique() {
    let options = ResolveOptions {
        unique: true,
        ..Default::default()
    };
    // The fully annotated copy wins the fewest-NA rule, every time.
    for _ in 0..3 {
        let table = resolve_human(&["U2AF1", "TP53"], &options).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "entrezid"), Some("7307"));
        assert_eq!(table.get(1, "symbol"), Some("TP53"));
    }
}

#[test]
fn test_duplicate_inputs_are_repetition_not_ambiguity() {
    let table = resolve_human(
        &["TP53", "TP53"],
        &ResolveOptions {
            unique: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0, "ensembl"), table.get(1, "ensembl"));
}

#[test]
fn test_genome_builds_give_different_coordinates() {
    let catalog = catalog();
    let input = ids(&["TP53"]);
    let options = ResolveOptions::default();

    let v38 =
        gene_solver::resolve_ids(&catalog, Some(&input), "human", GenomeBuild::V38, &options)
            .unwrap();
    let v19 =
        gene_solver::resolve_ids(&catalog, Some(&input), "human", GenomeBuild::V19, &options)
            .unwrap();

    assert_eq!(v38.get(0, "start"), Some("7668421"));
    assert_eq!(v19.get(0, "start"), Some("7571720"));
}

#[test]
fn test_mouse_alias_resolution() {
    let catalog = catalog();
    let input = ids(&["Trp53", "Actb"]);
    let table = gene_solver::resolve_ids(
        &catalog,
        Some(&input),
        "mm",
        GenomeBuild::V38,
        &ResolveOptions::default(),
    )
    .unwrap();

    assert_eq!(table.get(0, "entrezid"), Some("22059"));
    assert_eq!(table.get(1, "entrezid"), Some("11461"));
}

#[test]
fn test_unknown_organism_fails_before_resolution() {
    let catalog = catalog();
    let input = ids(&["TP53"]);
    let err = gene_solver::resolve_ids(
        &catalog,
        Some(&input),
        "zebrafish",
        GenomeBuild::V38,
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("zebrafish"));
}

#[test]
fn test_invalid_key_type_carries_sample() {
    // Mixed-shape batch with zero reference hits: undecidable
    let err = resolve_human(
        &["99991", "XXXX2", "XXXX3", "XXXX4", "XXXX5", "XXXX6"],
        &ResolveOptions::default(),
    )
    .unwrap_err();

    match err {
        ResolveError::InvalidKeyType { sample } => {
            assert_eq!(sample.len(), 5);
            assert_eq!(sample[0], "99991");
        }
        other => panic!("expected InvalidKeyType, got {other:?}"),
    }
}

#[test]
fn test_no_ids_returns_whole_annotation() {
    let catalog = catalog();
    let table = gene_solver::resolve_ids(
        &catalog,
        None,
        "human",
        GenomeBuild::V38,
        &ResolveOptions::default(),
    )
    .unwrap();

    let reference = catalog.table("human", GenomeBuild::V38).unwrap();
    assert_eq!(table.len(), reference.len());
    assert!(table.column_index("input_id").is_none());
    assert!(table.column_index("symbol").is_some());
}
