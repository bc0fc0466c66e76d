// src/config/model.rs

use std::collections::HashMap;

use serde::Deserialize;

use crate::collections::{SortError, SortPolicy, sort_dependencies_with};

/// Dependency file as read from TOML, before validation.
///
/// ```toml
/// [policy]
/// circular_dependency_prohibited = true
/// missing_dependency_prohibited = false
///
/// [[node]]
/// name = "app"
/// after = ["lib", "log"]
///
/// [[node]]
/// name = "lib"
/// ```
///
/// Node order in the file is the input order of the sort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSortFile {
    /// Error policy from `[policy]`. Both switches default to `true`.
    #[serde(default)]
    pub policy: SortPolicy,

    /// All `[[node]]` entries, in file order.
    #[serde(default, rename = "node")]
    pub nodes: Vec<NodeSpec>,
}

/// One `[[node]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeSpec {
    pub name: String,

    /// Names this node depends on. They do not have to be declared as
    /// nodes themselves; undeclared names are "missing" dependencies.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A validated dependency file. Build it with `SortFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct SortFile {
    policy: SortPolicy,
    nodes: Vec<NodeSpec>,
}

impl SortFile {
    pub(crate) fn new_unchecked(policy: SortPolicy, nodes: Vec<NodeSpec>) -> Self {
        Self { policy, nodes }
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    /// Replace the policy read from the file (used for CLI overrides).
    pub fn with_policy(mut self, policy: SortPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    /// Declared node names in file order.
    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.name.clone()).collect()
    }

    /// Direct dependencies keyed by node name.
    pub fn dependency_map(&self) -> HashMap<String, Vec<String>> {
        self.nodes
            .iter()
            .map(|n| (n.name.clone(), n.after.clone()))
            .collect()
    }

    /// Node names ordered so that dependencies come first.
    pub fn sorted(&self) -> Result<Vec<String>, SortError<String>> {
        let deps = self.dependency_map();
        let mut names = self.node_names();
        sort_dependencies_with(&mut names, self.policy, |name| deps.get(name).cloned())?;
        Ok(names)
    }
}
