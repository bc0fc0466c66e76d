use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use helpkit::collections::DependentNode;

/// Name-keyed dependency graph shared by all of its nodes.
///
/// Names that were never declared with [`GraphFixture::node`] report no
/// dependency collection at all (`None`), declared leaves report an empty one.
#[derive(Debug, Default)]
pub struct GraphFixture {
    edges: HashMap<String, Vec<String>>,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, name: &str, deps: &[&str]) -> Self {
        self.edges.insert(
            name.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn build(self) -> Graph {
        Graph {
            edges: Rc::new(self.edges),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    edges: Rc<HashMap<String, Vec<String>>>,
}

impl Graph {
    pub fn get(&self, name: &str) -> FixtureNode {
        FixtureNode {
            name: name.to_string(),
            edges: Rc::clone(&self.edges),
        }
    }

    pub fn list(&self, names: &[&str]) -> Vec<FixtureNode> {
        names.iter().map(|n| self.get(n)).collect()
    }
}

/// Node handle compared and hashed by name only.
#[derive(Clone)]
pub struct FixtureNode {
    name: String,
    edges: Rc<HashMap<String, Vec<String>>>,
}

impl FixtureNode {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for FixtureNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FixtureNode {}

impl Hash for FixtureNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for FixtureNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl DependentNode for FixtureNode {
    fn dependencies(&self) -> Option<Vec<Self>> {
        let deps = self.edges.get(&self.name)?;
        Some(
            deps.iter()
                .map(|d| FixtureNode {
                    name: d.clone(),
                    edges: Rc::clone(&self.edges),
                })
                .collect(),
        )
    }
}

/// Names of `nodes`, in order.
pub fn names(nodes: &[FixtureNode]) -> Vec<&str> {
    nodes.iter().map(FixtureNode::name).collect()
}
