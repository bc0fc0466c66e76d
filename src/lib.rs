// src/lib.rs

//! Small, independent helpers:
//!
//! - [`collections`]: dependency ordering with cycle detection, enum bit sets.
//! - [`expr`]: shunting-yard conversion of infix expressions to RPN or a tree,
//!   with arithmetic and short-circuit boolean evaluation.
//! - [`text`]: hex dumps.
//!
//! The `helpkit` binary exposes these through [`cli`]; [`run`] is its entry
//! point and [`execute`] produces the output of a single command.

pub mod cli;
pub mod collections;
pub mod config;
pub mod errors;
pub mod expr;
pub mod logging;
pub mod text;

use std::collections::HashMap;
use std::fs;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;
use crate::expr::arithmetic;
use crate::expr::logical;
use crate::expr::render_rpn;
use crate::text::HexDump;

/// High-level entry point used by `main.rs`: run the command and print its
/// output to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let output = execute(&args.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Run a single command and return what it would print.
pub fn execute(command: &Command) -> errors::Result<String> {
    match command {
        Command::Sort {
            config,
            allow_cycles,
            allow_missing,
        } => {
            let file = load_and_validate(config)?;
            let mut policy = file.policy();
            if *allow_cycles {
                policy.circular_dependency_prohibited = false;
            }
            if *allow_missing {
                policy.missing_dependency_prohibited = false;
            }
            debug!(?policy, "effective sort policy");

            let order = file.with_policy(policy).sorted()?;
            info!(nodes = order.len(), "dependency order computed");
            Ok(order.join("\n"))
        }
        Command::Rpn { expression } => {
            let rpn = arithmetic::to_rpn(expression)?;
            Ok(render_rpn(&rpn))
        }
        Command::Eval { expression, ast } => {
            let value = if *ast {
                arithmetic::parse(expression)?.evaluate()?
            } else {
                arithmetic::evaluate(expression)?
            };
            Ok(value.to_string())
        }
        Command::Truth {
            expression,
            assignments,
        } => {
            let env: HashMap<String, bool> = assignments.iter().cloned().collect();
            let tree = logical::parse(expression, &env)?;
            match logical::path_of_truth(&tree)? {
                Some(terms) => Ok(format!("true: {}", terms.join(" "))),
                None => Ok("false".to_string()),
            }
        }
        Command::Hexdump { path, width } => {
            let bytes = fs::read(path)?;
            debug!(path = %path.display(), len = bytes.len(), "dumping file");
            Ok(HexDump::new(&bytes).with_width(*width).to_string())
        }
    }
}
