// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `helpkit`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "helpkit",
    version,
    about = "Dependency ordering, expression evaluation and hex dumps.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HELPKIT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the nodes of a dependency file, dependencies first.
    Sort {
        /// Path to the dependency file (TOML).
        #[arg(long, value_name = "PATH", default_value = "Helpkit.toml")]
        config: String,

        /// Do not fail on circular dependencies.
        #[arg(long)]
        allow_cycles: bool,

        /// Drop undeclared dependencies instead of failing.
        #[arg(long)]
        allow_missing: bool,
    },

    /// Convert an arithmetic expression to Reverse Polish Notation.
    Rpn {
        expression: String,
    },

    /// Evaluate an arithmetic expression.
    Eval {
        expression: String,

        /// Evaluate the expression tree instead of the RPN form.
        #[arg(long)]
        ast: bool,
    },

    /// Evaluate a boolean expression and print the terms that made it true.
    Truth {
        expression: String,

        /// Term assignment, e.g. `--set a=true`. Repeatable.
        #[arg(long = "set", value_name = "NAME=BOOL", value_parser = parse_assignment)]
        assignments: Vec<(String, bool)>,
    },

    /// Print a hex dump of a file.
    Hexdump {
        path: PathBuf,

        /// Bytes per line.
        #[arg(long, default_value_t = 16)]
        width: usize,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_assignment(s: &str) -> Result<(String, bool), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BOOL, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("'{value}' is not true or false"))?;
    Ok((name.trim().to_string(), value))
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
