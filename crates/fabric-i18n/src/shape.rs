//! Structural comparison of copy documents.
//!
//! A copy document's shape is the set of key paths to its leaves, with
//! array elements addressed by index (`landing.metrics[0].label`). Two
//! languages are interchangeable when their shapes are equal and no leaf
//! is null.

use serde_json::Value;
use std::collections::BTreeSet;

/// Leaf key paths of `value`, sorted.
pub fn key_paths(value: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect(value, String::new(), &mut paths);
    paths
}

/// Key paths whose value is null.
pub fn null_paths(value: &Value) -> Vec<String> {
    let mut nulls = Vec::new();
    collect_nulls(value, String::new(), &mut nulls);
    nulls
}

/// Differences between a candidate shape and a reference shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeDiff {
    /// Present in the reference only
    pub missing: Vec<String>,
    /// Present in the candidate only
    pub unexpected: Vec<String>,
}

impl ShapeDiff {
    /// Compares `candidate` against `reference`.
    pub fn between(reference: &Value, candidate: &Value) -> Self {
        let expected = key_paths(reference);
        let actual = key_paths(candidate);
        Self {
            missing: expected.difference(&actual).cloned().collect(),
            unexpected: actual.difference(&expected).cloned().collect(),
        }
    }

    /// Whether both shapes are identical.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn collect(value: &Value, path: String, paths: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                collect(child, child_path(&path, key), paths);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect(child, format!("{path}[{index}]"), paths);
            }
        }
        _ => {
            paths.insert(path);
        }
    }
}

fn collect_nulls(value: &Value, path: String, nulls: &mut Vec<String>) {
    match value {
        Value::Null => nulls.push(path),
        Value::Object(map) => {
            for (key, child) in map {
                collect_nulls(child, child_path(&path, key), nulls);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_nulls(child, format!("{path}[{index}]"), nulls);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_paths_index_arrays() {
        let doc = json!({"a": {"b": "x", "c": ["y", "z"]}, "d": [{"e": "w"}]});
        let paths: Vec<_> = key_paths(&doc).into_iter().collect();
        assert_eq!(paths, vec!["a.b", "a.c[0]", "a.c[1]", "d[0].e"]);
    }

    #[test]
    fn test_diff_reports_both_directions() {
        let en = json!({"title": "Hi", "items": ["a", "b"]});
        let ko = json!({"title": "안녕", "items": ["a"], "extra": "!"});
        let diff = ShapeDiff::between(&en, &ko);
        assert_eq!(diff.missing, vec!["items[1]"]);
        assert_eq!(diff.unexpected, vec!["extra"]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_identical_shapes() {
        let en = json!({"nav": {"landing": "Landing"}});
        let bg = json!({"nav": {"landing": "Начало"}});
        assert!(ShapeDiff::between(&en, &bg).is_empty());
    }

    #[test]
    fn test_null_paths() {
        let doc = json!({"a": null, "b": [{"c": null}, {"c": "ok"}]});
        assert_eq!(null_paths(&doc), vec!["a", "b[0].c"]);
    }
}
