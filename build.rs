use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/pam_motifs.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nPAM CATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nPAM CATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nPAM CATALOG BUILD ERROR: Invalid JSON\n\
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
        "\n\nPAM CATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let templates = catalog.get("templates").unwrap_or_else(|| {
        panic!(
            "\n\nPAM CATALOG BUILD ERROR: Missing 'templates' field\n\
             The catalog must have a top-level 'templates' array.\n"
        );
    });

    let templates = templates.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nPAM CATALOG BUILD ERROR: 'templates' must be an array\n\
             Got: {templates}\n"
        );
    });

    assert!(
        !templates.is_empty(),
        "\n\nPAM CATALOG BUILD ERROR: 'templates' array is empty\n"
    );

    for (index, template) in templates.iter().enumerate() {
        validate_template(template, index);
    }
}

fn validate_template(template: &serde_json::Value, index: usize) {
    let template_id = template
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");

    assert!(
        template.get("id").is_some(),
        "\n\nPAM CATALOG BUILD ERROR: Template at index {index} missing 'id' field\n"
    );
    assert!(
        template.get("display_name").is_some(),
        "\n\nPAM CATALOG BUILD ERROR: Template '{template_id}' (index {index}) missing 'display_name' field\n"
    );

    let pattern = template
        .get("pattern")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nPAM CATALOG BUILD ERROR: Template '{template_id}' (index {index}) missing 'pattern' field\n"
            );
        });

    assert!(
        !pattern.is_empty(),
        "\n\nPAM CATALOG BUILD ERROR: Template '{template_id}' has an empty pattern\n"
    );

    // Same wildcard alphabet the matcher accepts at construction time
    for symbol in pattern.chars() {
        assert!(
            matches!(symbol, 'N' | 'A' | 'T' | 'G' | 'C' | 'R' | 'W' | 'V' | 'Y' | 'M'),
            "\n\nPAM CATALOG BUILD ERROR: Template '{template_id}' pattern '{pattern}' contains unsupported symbol '{symbol}'\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/pam_motifs.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
