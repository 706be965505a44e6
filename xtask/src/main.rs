//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(depalign_settings::DepalignConfigV1)
}

fn generate_graph_schema() -> schemars::Schema {
    schema_for!(depalign_types::GraphDocument)
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(depalign_types::AlignmentReceipt)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "depalign.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "depalign.graph.v1.json",
            generate: generate_graph_schema,
        },
        SchemaSpec {
            filename: "depalign.report.v1.json",
            generate: generate_report_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected =
            serde_json::to_value((spec.generate)()).context("Failed to convert schema")?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        // Compared as JSON values so key order and whitespace do not count as drift.
        let actual: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture graphs and configs against their schemas");
    eprintln!(
        "  conform-full      conform + run depalign on each fixture and check receipts against goldens"
    );
}

/// Validate every fixture's `graph.json` and `depalign.toml`.
///
/// Graphs are checked against the graph schema and must also load through `depalign-graph`;
/// configs are converted from TOML to JSON and checked against the config schema.
fn conform() -> anyhow::Result<()> {
    let graph_schema = compile(&generate_graph_schema())?;
    let config_schema = compile(&generate_config_schema())?;
    println!("✓ graph and config schemas compile");

    let fixtures_dir = depalign_test_util::fixtures_dir(&project_root());
    let mut graphs = 0;
    let mut configs = 0;
    let mut errors = Vec::new();

    for entry in WalkDir::new(&fixtures_dir).sort_by_file_name() {
        let entry = entry.context("Failed to walk tests/fixtures/")?;
        let path = entry.path();
        let name = path
            .strip_prefix(&fixtures_dir)
            .unwrap_or(path)
            .display()
            .to_string();

        match path.file_name().and_then(|n| n.to_str()) {
            Some("graph.json") => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {name}"))?;
                let value: serde_json::Value = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {name} as JSON"))?;
                for err in graph_schema.iter_errors(&value) {
                    errors.push(format!("{name}: schema validation: {err}"));
                }
                if let Err(err) = depalign_graph::parse_graph(&content, &name) {
                    errors.push(format!("{name}: {err}"));
                }
                graphs += 1;
                println!("  ✓ {name}");
            }
            Some("depalign.toml") => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {name}"))?;
                let value: serde_json::Value = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {name} as TOML"))?;
                for err in config_schema.iter_errors(&value) {
                    errors.push(format!("{name}: schema validation: {err}"));
                }
                configs += 1;
                println!("  ✓ {name}");
            }
            _ => {}
        }
    }

    if graphs == 0 {
        bail!("No graph.json fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ {graphs} graphs and {configs} configs pass conformance checks!");
    Ok(())
}

/// `conform`, then run the built depalign binary on each fixture and validate its receipt.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    println!("\n--- Full conformance: depalign binary output ---\n");

    let report_schema = compile(&generate_report_schema())?;

    let depalign_bin = project_root().join("target").join("debug").join("depalign");
    #[cfg(target_os = "windows")]
    let depalign_bin = depalign_bin.with_extension("exe");

    if !depalign_bin.exists() {
        bail!(
            "depalign binary not found at {}.\n\
            Run `cargo build -p depalign-cli` first.",
            depalign_bin.display()
        );
    }

    let fixtures_dir = depalign_test_util::fixtures_dir(&project_root());
    let mut errors = Vec::new();
    let mut count = 0;

    for entry in fs::read_dir(&fixtures_dir).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        if !fixture_dir.join("graph.json").exists() {
            continue;
        }
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let receipt_path = temp_dir.path().join("receipt.json");

        let output = std::process::Command::new(&depalign_bin)
            .arg("--graph")
            .arg(fixture_dir.join("graph.json"))
            .arg("--config")
            .arg(fixture_dir.join("depalign.toml"))
            .arg("--output-file")
            .arg(temp_dir.path().join("report.txt"))
            .arg("aggregate-report")
            .arg("--report-json")
            .arg(&receipt_path)
            .output()
            .with_context(|| format!("Failed to run depalign on {name}"))?;

        match output.status.code() {
            Some(0) | Some(2) => {}
            other => {
                errors.push(format!(
                    "{name}: unexpected exit code {other:?}: {}",
                    String::from_utf8_lossy(&output.stderr)
                ));
                continue;
            }
        }

        let content = fs::read_to_string(&receipt_path)
            .with_context(|| format!("Failed to read receipt for {name}"))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse receipt for {name}"))?;
        for err in report_schema.iter_errors(&value) {
            errors.push(format!("{name}: receipt schema validation: {err}"));
        }
        if let Err(err) = serde_json::from_value::<depalign_types::AlignmentReceipt>(value.clone())
        {
            errors.push(format!("{name}: receipt does not deserialize: {err}"));
        }

        let golden_path = fixture_dir.join("expected.receipt.json");
        if golden_path.exists() {
            let golden: serde_json::Value = serde_json::from_str(
                &fs::read_to_string(&golden_path)
                    .with_context(|| format!("Failed to read {}", golden_path.display()))?,
            )
            .with_context(|| format!("Failed to parse {}", golden_path.display()))?;
            if depalign_test_util::normalize_nondeterministic(value) != golden {
                errors.push(format!("{name}: receipt differs from expected.receipt.json"));
            }
        }

        count += 1;
        println!("  ✓ {name} receipt validates");
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Full conformance failed with {} errors", errors.len());
    }

    println!("\n✓ All {count} fixture receipts pass conformance checks!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
