//! Configuration file upgrades: detect keys missing from an older file and
//! fill them in with their defaults, leaving existing values untouched.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

fn defaults_mapping() -> io::Result<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(io::Error::other)?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(io::Error::other("default configuration is not a mapping")),
    }
}

fn read_mapping(path: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content).map_err(io::Error::other)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(io::Error::other(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty when the file was already complete).
pub fn fill_missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(current)).map_err(io::Error::other)?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
