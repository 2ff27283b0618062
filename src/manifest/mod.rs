//! YAML manifest handling
//!
//! A [`Manifest`] is the top-level mapping of a YAML document together with
//! the path it was loaded from. Loading is restricted to plain data: core
//! `!!` tags are resolved by the YAML parser into plain scalars (so
//! `!!binary` and `!!timestamp` values come back as strings), and any other
//! explicit tag is rejected rather than interpreted.

mod write;

pub use write::write_atomic;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{Result, fs::from_read_error, manifest_not_mapping, manifest_parse_failed};

/// A YAML manifest loaded from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    root: Mapping,
}

impl Manifest {
    /// Load the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| from_read_error(path, &e))?;
        let manifest = Self::from_yaml(path, &content)?;

        tracing::debug!(
            path = %path.display(),
            keys = manifest.root.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest content; `path` is only used for error reporting and saving.
    ///
    /// A document with no content (blank, comments only, or `null`) is an
    /// empty mapping.
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        let display = path.display().to_string();

        if is_blank_document(content) {
            return Ok(Self {
                path: path.to_path_buf(),
                root: Mapping::new(),
            });
        }

        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| manifest_parse_failed(display.clone(), e.to_string()))?;

        if let Some(tag) = find_tag(&value) {
            return Err(manifest_parse_failed(
                display,
                format!("unsupported tag '{tag}'; only plain scalars, sequences and mappings are allowed"),
            ));
        }

        let root = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => return Err(manifest_not_mapping(display, describe(&other))),
        };

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Path the manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a top-level key
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Store `lines` as a sequence of strings under `key`.
    ///
    /// Any previous value is replaced, not merged, and returned.
    pub fn set_lines(&mut self, key: &str, lines: Vec<String>) -> Option<Value> {
        let sequence = lines.into_iter().map(Value::String).collect();
        self.root
            .insert(Value::String(key.to_string()), Value::Sequence(sequence))
    }

    /// Serialize the manifest to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.root).map_err(|e| {
            crate::error::file_write_failed(self.path.display().to_string(), e.to_string())
        })
    }

    /// Write the manifest back to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        let content = self.to_yaml()?;
        write_atomic(&self.path, &content)
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// First explicit tag found anywhere in `value`, keys included
fn find_tag(value: &Value) -> Option<String> {
    match value {
        Value::Tagged(tagged) => Some(tagged.tag.to_string()),
        Value::Sequence(items) => items.iter().find_map(find_tag),
        Value::Mapping(mapping) => mapping
            .iter()
            .find_map(|(k, v)| find_tag(k).or_else(|| find_tag(v))),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
