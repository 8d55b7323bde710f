//! Configuration file upgrades: detect and fill keys added in newer versions.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content =
        fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys present in the default configuration but absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping user values untouched.
/// Returns the keys that were added; the file is rewritten only when something changed.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }

    Ok(added)
}
