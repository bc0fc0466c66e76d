// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Module-level errors ([`SortError`], [`ParseError`], [`EvalError`],
//! [`FlagsError`]) convert into [`HelpkitError`] so the CLI and config layer
//! can use `?` across all of them.

use thiserror::Error;

use crate::collections::{FlagsError, SortError};
use crate::expr::{EvalError, ParseError};

#[derive(Error, Debug)]
pub enum HelpkitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Dependency sort failed: {0}")]
    Sort(#[from] SortError<String>),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Flag set error: {0}")]
    Flags(#[from] FlagsError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, HelpkitError>;
