use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::types::Package;

/// Read a package documentation model from a JSON file.
pub fn load_package(path: impl AsRef<Path>) -> Result<Package> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read package model {}", path.display()))?;
    parse_package(&json).with_context(|| format!("invalid package model {}", path.display()))
}

/// Parse a package documentation model from JSON text.
///
/// Collections missing from the input default to empty.
pub fn parse_package(json: &str) -> Result<Package> {
    let package: Package = serde_json::from_str(json).context("malformed package JSON")?;

    if package.name.trim().is_empty() {
        return Err(anyhow::anyhow!("package name is missing"));
    }

    debug!(
        package = %package.name,
        funcs = package.funcs.len(),
        types = package.types.len(),
        "loaded package model"
    );
    Ok(package)
}
