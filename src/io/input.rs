//! Loading metric and process documents.
//!
//! Documents are JSON, or YAML when the file extension is `.yaml`/`.yml`.

use crate::core::{ImpactSet, ProcessRecord};
use crate::errors::{ImpactmapError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("yaml") | Some("yml")
    )
}

/// Parse document text into a generic value according to `path`'s extension.
pub fn parse_document(path: &Path, contents: &str) -> Result<Value> {
    if is_yaml(path) {
        Ok(serde_yaml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

pub fn read_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| ImpactmapError::FileSystem {
        message: format!("cannot read {}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_document(path, &contents)
}

/// An impact set, optionally with the process it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactDocument {
    pub process: Option<ProcessRecord>,
    pub impact: ImpactSet,
}

/// Interpret a value as a process (object with an `impact` key) or a bare
/// impact set.
pub fn impact_document_from_value(path: &Path, value: Value) -> Result<ImpactDocument> {
    let Value::Object(ref map) = value else {
        return Err(ImpactmapError::input(
            path,
            "expected a process or an impact object",
        ));
    };

    if map.contains_key("impact") {
        let process: ProcessRecord = serde_json::from_value(value)?;
        Ok(ImpactDocument {
            impact: process.impact.clone(),
            process: Some(process),
        })
    } else {
        Ok(ImpactDocument {
            process: None,
            impact: serde_json::from_value(value)?,
        })
    }
}

pub fn load_impact_document(path: &Path) -> Result<ImpactDocument> {
    let value = read_document(path)?;
    impact_document_from_value(path, value)
}

/// Interpret a value as a list of processes, either a bare array or an
/// object with a `processes` array.
pub fn processes_from_value(path: &Path, value: Value) -> Result<Vec<ProcessRecord>> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("processes") {
            Some(list @ Value::Array(_)) => list,
            _ => {
                return Err(ImpactmapError::input(
                    path,
                    "expected a `processes` array",
                ))
            }
        },
        _ => return Err(ImpactmapError::input(path, "expected a list of processes")),
    };
    Ok(serde_json::from_value(list)?)
}

pub fn load_processes(path: &Path) -> Result<Vec<ProcessRecord>> {
    let value = read_document(path)?;
    processes_from_value(path, value)
}
