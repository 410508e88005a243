//! CLI integration tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn gene_solver() -> Command {
    Command::cargo_bin("gene-solver").unwrap()
}

#[test]
fn test_resolve_symbol_tsv() {
    gene_solver()
        .args(["resolve", "TP53", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENSG00000141510"))
        .stdout(predicate::str::starts_with("input_id\tsymbol"));
}

#[test]
fn test_resolve_json_output() {
    let output = gene_solver()
        .args(["resolve", "TP53", "BRCA1", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["input_id"], "TP53");
    assert_eq!(rows[1]["entrezid"], "672");
}

#[test]
fn test_resolve_unique_collapses_duplicated_symbol() {
    let output = gene_solver()
        .args(["resolve", "U2AF1", "--unique", "--format", "tsv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    // Header plus exactly one data row
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("ENSG00000160201"));
}

#[test]
fn test_resolve_drop_na() {
    gene_solver()
        .args([
            "resolve",
            "TP53",
            "FAKEID_NOT_REAL",
            "--drop-na",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("TP53"))
        .stdout(predicate::str::contains("FAKEID_NOT_REAL").not());
}

#[test]
fn test_resolve_ids_from_stdin() {
    gene_solver()
        .args(["resolve", "--ids-file", "-", "--format", "tsv"])
        .write_stdin("TP53\nBRCA1\n\nEGFR\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ENSG00000146648"));
}

#[test]
fn test_resolve_mouse_organism() {
    gene_solver()
        .args(["resolve", "Trp53", "--organism", "mouse", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENSMUSG00000059552"));
}

#[test]
fn test_resolve_v19_coordinates() {
    gene_solver()
        .args(["resolve", "TP53", "--build", "hg19", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7571720"));
}

#[test]
fn test_unknown_organism_is_an_error() {
    gene_solver()
        .args(["resolve", "TP53", "--organism", "zebrafish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown organism"));
}

#[test]
fn test_unknown_build_is_an_error() {
    gene_solver()
        .args(["resolve", "TP53", "--build", "t2t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown genome build"));
}

#[test]
fn test_unmatched_id_resolves_to_na_row() {
    gene_solver()
        .args(["resolve", "FAKEID_NOT_REAL", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAKEID_NOT_REAL\tNA"));
}

#[test]
fn test_unresolvable_mixed_batch_is_an_error() {
    gene_solver()
        .args(["resolve", "99999", "NOT_A_GENE_AT_ALL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identifier column"));
}

#[test]
fn test_resolve_without_ids_prints_full_table() {
    let output = gene_solver()
        .args(["resolve", "--format", "tsv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let mut lines = stdout.lines();
    assert!(!lines.next().unwrap().contains("input_id"));
    assert!(lines.count() > 10);
}

#[test]
fn test_catalog_list() {
    gene_solver()
        .args(["catalog", "list", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("human\tv38"))
        .stdout(predicate::str::contains("human\tv19"))
        .stdout(predicate::str::contains("mouse"));
}

#[test]
fn test_catalog_show() {
    gene_solver()
        .args(["catalog", "show", "--organism", "rat", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENSRNOG00000010756"));
}

#[test]
fn test_catalog_export_round_trips() {
    let output = gene_solver()
        .args(["catalog", "export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed["tables"].as_array().unwrap().len() >= 4);
}
