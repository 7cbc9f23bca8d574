//! Build script for fabric-i18n crate
//!
//! Validates the locale copy documents at compile time:
//! - Every supported locale has a document
//! - Every document is valid JSON
//! - Every document has exactly the key paths of `en.json`
//! - No leaf is null

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use serde_json::Value;

const LOCALES: [&str; 6] = ["en", "zh", "ko", "ru", "ar", "bg"];
const REFERENCE: &str = "en";

/// Collect leaf key paths, addressing array items by index
fn collect_paths(value: &Value, path: &str, paths: &mut BTreeSet<String>, nulls: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                collect_paths(child, &child_path, paths, nulls);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect_paths(child, &format!("{path}[{index}]"), paths, nulls);
            }
        }
        Value::Null => {
            nulls.push(path.to_string());
            paths.insert(path.to_string());
        }
        _ => {
            paths.insert(path.to_string());
        }
    }
}

fn locales_dir() -> Result<PathBuf, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let dir = Path::new(&manifest_dir).join("locales");
    if !dir.exists() {
        return Err(format!("Locales directory not found: {}", dir.display()));
    }
    Ok(dir)
}

fn read_locale(dir: &Path, code: &str) -> Result<(BTreeSet<String>, Vec<String>), String> {
    let path = dir.join(format!("{code}.json"));
    println!("cargo:rerun-if-changed={}", path.display());

    let content =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;

    let mut paths = BTreeSet::new();
    let mut nulls = Vec::new();
    collect_paths(&value, "", &mut paths, &mut nulls);
    Ok((paths, nulls))
}

fn validate_locales() -> Result<(), String> {
    let dir = locales_dir()?;
    println!("cargo:rerun-if-changed={}", dir.display());

    let (reference, reference_nulls) = read_locale(&dir, REFERENCE)?;
    let mut errors = Vec::new();
    for path in &reference_nulls {
        errors.push(format!("{REFERENCE}: null value at '{path}'"));
    }

    for code in LOCALES.iter().filter(|code| **code != REFERENCE) {
        let (paths, nulls) = match read_locale(&dir, code) {
            Ok(result) => result,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        for missing in reference.difference(&paths) {
            errors.push(format!("{code}: missing key '{missing}'"));
        }
        for extra in paths.difference(&reference) {
            errors.push(format!("{code}: extra key '{extra}'"));
        }
        for path in nulls {
            errors.push(format!("{code}: null value at '{path}'"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
