// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawSortFile, SortFile};
use crate::errors::{HelpkitError, Result};

impl TryFrom<RawSortFile> for SortFile {
    type Error = HelpkitError;

    fn try_from(raw: RawSortFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(SortFile::new_unchecked(raw.policy, raw.nodes))
    }
}

/// Structural checks on a raw dependency file.
///
/// Cycles and undeclared dependencies are not rejected here; whether they
/// are errors is up to the sort policy.
pub fn validate_config(cfg: &RawSortFile) -> Result<()> {
    ensure_has_nodes(cfg)?;
    validate_node_names(cfg)?;
    validate_dependency_names(cfg)?;
    Ok(())
}

fn ensure_has_nodes(cfg: &RawSortFile) -> Result<()> {
    if cfg.nodes.is_empty() {
        return Err(HelpkitError::ConfigError(
            "config must contain at least one [[node]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_node_names(cfg: &RawSortFile) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, node) in cfg.nodes.iter().enumerate() {
        if node.name.trim().is_empty() {
            return Err(HelpkitError::ConfigError(format!(
                "node #{} has an empty name",
                idx + 1
            )));
        }
        if !seen.insert(node.name.as_str()) {
            return Err(HelpkitError::ConfigError(format!(
                "node '{}' is declared more than once",
                node.name
            )));
        }
    }
    Ok(())
}

fn validate_dependency_names(cfg: &RawSortFile) -> Result<()> {
    for node in cfg.nodes.iter() {
        if node.after.iter().any(|dep| dep.trim().is_empty()) {
            return Err(HelpkitError::ConfigError(format!(
                "node '{}' has an empty name in `after`",
                node.name
            )));
        }
    }
    Ok(())
}
