//! Build script generating diagnostic code data at compile time.
//!
//! Reads `spec/diagnostics.json` and writes two files into `OUT_DIR`:
//! - `generated_codes.rs`: public constants mapping constant names to IDs
//! - `generated_explain.rs`: a match expression mapping IDs to explanations

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let spec_path = Path::new("spec/diagnostics.json");
    println!("cargo:rerun-if-changed={}", spec_path.display());

    let raw = fs::read_to_string(spec_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", spec_path.display()));

    let spec: serde_json::Value =
        serde_json::from_str(&raw).expect("failed to parse diagnostics.json");

    let diagnostics = spec["diagnostics"]
        .as_array()
        .expect("diagnostics.json: expected `diagnostics` array");

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    // ── generated_codes.rs ──────────────────────────────────────────────
    let mut codes =
        String::from("// Auto-generated from spec/diagnostics.json — DO NOT EDIT.\n\n");

    for (i, entry) in diagnostics.iter().enumerate() {
        let id = entry["id"]
            .as_str()
            .unwrap_or_else(|| panic!("diagnostics[{i}] missing `id`"));
        let const_name = entry["constName"]
            .as_str()
            .unwrap_or_else(|| panic!("diagnostics[{i}] (id={id}) missing `constName`"));
        let summary = entry["summary"]
            .as_str()
            .unwrap_or_else(|| panic!("diagnostics[{i}] (id={id}) missing `summary`"));

        assert!(
            !const_name.is_empty()
                && const_name
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
                && const_name.as_bytes()[0].is_ascii_uppercase(),
            "diagnostics[{i}]: constName `{const_name}` is not SCREAMING_SNAKE_CASE"
        );
        assert!(
            seen_ids.insert(id.to_string()),
            "duplicate diagnostic id `{id}`"
        );
        assert!(
            seen_names.insert(const_name.to_string()),
            "duplicate diagnostic constName `{const_name}`"
        );

        codes.push_str(&format!(
            "/// `{id}`: {summary}\npub const {const_name}: &str = \"{id}\";\n\n",
        ));
    }

    fs::write(out_path.join("generated_codes.rs"), codes).expect("write generated_codes.rs");

    // ── generated_explain.rs ────────────────────────────────────────────
    let mut explain = String::from("match id {\n");
    for entry in diagnostics {
        let id = entry["id"].as_str().unwrap();
        let summary = entry["summary"].as_str().unwrap();
        explain.push_str(&format!("    {id:?} => Some({summary:?}),\n"));
    }
    explain.push_str("    _ => None,\n}\n");

    fs::write(out_path.join("generated_explain.rs"), explain).expect("write generated_explain.rs");
}
