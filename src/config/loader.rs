// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSortFile, SortFile};
use crate::errors::Result;

/// Read and deserialize a dependency file without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSortFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawSortFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), nodes = config.nodes.len(), "loaded dependency file");

    Ok(config)
}

/// Read a dependency file and run structural validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SortFile> {
    let raw_config = load_from_path(&path)?;
    let config = SortFile::try_from(raw_config)?;
    Ok(config)
}

/// `Helpkit.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Helpkit.toml")
}
