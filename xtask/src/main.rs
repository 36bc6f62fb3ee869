//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use mergesignal_test_util::normalize_nondeterministic;
use mergesignal_types::explain;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_default();

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return parent.to_path_buf();
    }
    manifest_dir
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the CLI golden fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(mergesignal_types::ReportEnvelope)
}

fn generate_pull_schema() -> schemars::Schema {
    schema_for!(mergesignal_types::PullSnapshotV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(mergesignal_settings::MergesignalConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "mergesignal.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "mergesignal.pull.v1.json",
            generate: generate_pull_schema,
        },
        SchemaSpec {
            filename: "mergesignal.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
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

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

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
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
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
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
    eprintln!("  explain-coverage  Validate all signal and mode IDs have explanations");
}

fn compile(spec: fn() -> schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(spec()).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Validate golden fixtures.
///
/// For every `tests/fixtures/<name>/`:
/// 1. `pull.json` validates against the pull snapshot schema
/// 2. `expected.report.json` validates against the report schema and is already normalized
/// 3. `mergesignal.toml` resolves, unless the fixture has no expected report
///    (those fixtures exercise configuration errors and must fail to resolve)
fn conform() -> anyhow::Result<()> {
    let pull_schema = compile(generate_pull_schema)?;
    let report_schema = compile(generate_report_schema)?;
    println!("✓ pull and report schemas compile");

    let dir = fixtures_dir();
    let mut entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    for entry in entries {
        let fixture_dir = entry.path();
        let pull_path = fixture_dir.join("pull.json");
        if !fixture_dir.is_dir() || !pull_path.exists() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        let pull = read_json(&pull_path)?;
        for err in pull_schema.iter_errors(&pull) {
            errors.push(format!("{}/pull.json: schema validation: {}", name, err));
        }

        let report_path = fixture_dir.join("expected.report.json");
        let expects_report = report_path.exists();
        if expects_report {
            let report = read_json(&report_path)?;
            for err in report_schema.iter_errors(&report) {
                errors.push(format!(
                    "{}/expected.report.json: schema validation: {}",
                    name, err
                ));
            }
            if normalize_nondeterministic(report.clone()) != report {
                errors.push(format!(
                    "{}/expected.report.json: timestamps and tool.version must use placeholders",
                    name
                ));
            }
        }

        let config_path = fixture_dir.join("mergesignal.toml");
        if config_path.exists() {
            let text = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let resolved = mergesignal_settings::parse_config_toml(&text)
                .and_then(mergesignal_settings::resolve_config);
            match (resolved, expects_report) {
                (Err(e), true) => {
                    errors.push(format!("{}/mergesignal.toml: {:#}", name, e));
                }
                (Ok(_), false) => {
                    errors.push(format!(
                        "{}/mergesignal.toml: resolves, but the fixture has no expected report",
                        name
                    ));
                }
                _ => {}
            }
        }

        fixture_count += 1;
        println!("  ✓ {} checked", name);
    }

    if fixture_count == 0 {
        bail!("No fixtures found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", fixture_count);
    Ok(())
}

/// Validate that all signal and mode IDs have explanations, and that every example config resolves.
fn explain_coverage() -> anyhow::Result<()> {
    let signal_ids = explain::all_signal_ids();
    let mode_ids = explain::all_mode_ids();

    let mut errors = Vec::new();

    for id in signal_ids.iter().chain(mode_ids) {
        let Some(exp) = explain::lookup_explanation(id) else {
            errors.push(format!("'{}' has no explanation", id));
            continue;
        };
        if exp.title.is_empty() {
            errors.push(format!("'{}' has empty title", id));
        }
        if exp.description.is_empty() {
            errors.push(format!("'{}' has empty description", id));
        }
        if exp.usage.is_empty() {
            errors.push(format!("'{}' has empty usage", id));
        }
        if let Err(e) = mergesignal_settings::parse_config_toml(exp.examples.config)
            .and_then(mergesignal_settings::resolve_config)
        {
            errors.push(format!("'{}' example config is invalid: {:#}", id, e));
        }
    }

    if errors.is_empty() {
        println!("✓ {} signal IDs have explanations", signal_ids.len());
        println!("✓ {} match modes have explanations", mode_ids.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
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
        "explain-coverage" => explain_coverage(),
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
