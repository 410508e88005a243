use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/gene_annotations.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let tables = catalog.get("tables").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'tables' field\n\
             The catalog must have a top-level 'tables' array.\n"
        );
    });

    let tables = tables.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'tables' must be an array\n\
             Got: {tables}\n"
        );
    });

    let total_genes = validate_tables(tables);

    println!(
        "cargo:warning=Validated catalog: {} tables, {total_genes} total gene records",
        tables.len()
    );
}

fn validate_tables(tables: &[serde_json::Value]) -> usize {
    let mut total_genes = 0;

    for (i, table) in tables.iter().enumerate() {
        let organism = table
            .get("organism")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        assert!(
            table.get("organism").is_some(),
            "\n\nCATALOG BUILD ERROR: Table at index {i} missing 'organism' field\n"
        );
        assert!(
            table.get("build").is_some(),
            "\n\nCATALOG BUILD ERROR: Table '{organism}' (index {i}) missing 'build' field\n"
        );
        assert!(
            table.get("genes").is_some(),
            "\n\nCATALOG BUILD ERROR: Table '{organism}' (index {i}) missing 'genes' field\n"
        );

        total_genes += validate_table_genes(table, organism);
    }

    total_genes
}

fn validate_table_genes(table: &serde_json::Value, organism: &str) -> usize {
    if let Some(genes) = table.get("genes").and_then(|g| g.as_array()) {
        for (j, gene) in genes.iter().enumerate() {
            let symbol = gene.get("symbol").and_then(|v| v.as_str());
            assert!(
                symbol.is_some_and(|s| !s.is_empty()),
                "\n\nCATALOG BUILD ERROR: Table '{organism}' gene {j} missing or empty 'symbol'\n\
                 Gene records must carry a non-empty symbol.\n"
            );
        }
        genes.len()
    } else {
        0
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/gene_annotations.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
