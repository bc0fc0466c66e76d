// src/config/mod.rs

//! Dependency-file configuration for the `sort` command.
//!
//! - `model.rs`: TOML-backed data model.
//! - `loader.rs`: reading files from disk.
//! - `validate.rs`: structural checks (names present and unique).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{NodeSpec, RawSortFile, SortFile};
pub use validate::validate_config;
