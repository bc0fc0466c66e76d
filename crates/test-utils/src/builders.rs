#![allow(dead_code)]

use helpkit::collections::SortPolicy;
use helpkit::config::{NodeSpec, RawSortFile, SortFile};

/// Builder for `SortFile` to simplify test setup.
pub struct SortFileBuilder {
    config: RawSortFile,
}

impl SortFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawSortFile::default(),
        }
    }

    pub fn with_node(mut self, node: NodeSpec) -> Self {
        self.config.nodes.push(node);
        self
    }

    pub fn with_policy(mut self, policy: SortPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn allow_cycles(mut self) -> Self {
        self.config.policy.circular_dependency_prohibited = false;
        self
    }

    pub fn allow_missing(mut self) -> Self {
        self.config.policy.missing_dependency_prohibited = false;
        self
    }

    pub fn build_raw(self) -> RawSortFile {
        self.config
    }

    pub fn build(self) -> SortFile {
        SortFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for SortFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NodeSpec`.
pub struct NodeSpecBuilder {
    node: NodeSpec,
}

impl NodeSpecBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            node: NodeSpec {
                name: name.to_string(),
                after: vec![],
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.node.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> NodeSpec {
        self.node
    }
}
