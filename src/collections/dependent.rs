// src/collections/dependent.rs

//! Topological ordering of node lists with cycle detection.
//!
//! The graph is never materialised: adjacency is discovered by asking each
//! node (or a caller-supplied closure) for its direct dependencies. The sort
//! is a depth-first post-order walk over the input list, driven by an
//! explicit stack.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::vec;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::collections::cycle::find_cycle;
use crate::collections::error::SortError;

/// A node that knows its direct dependencies.
///
/// Equality and hashing decide node identity for membership checks, so
/// implementations usually compare by a key or by pointer.
pub trait DependentNode: Clone + Eq + Hash {
    /// Direct dependencies of this node. `None` and an empty vector are
    /// treated the same.
    fn dependencies(&self) -> Option<Vec<Self>>;
}

/// Error policy for [`sort_dependencies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortPolicy {
    /// Fail with [`SortError::CircularDependency`] when a node takes part
    /// in a cycle.
    pub circular_dependency_prohibited: bool,

    /// Fail with [`SortError::MissingElement`] when a reachable dependency
    /// is not part of the input list. Otherwise such nodes are dropped from
    /// the result.
    pub missing_dependency_prohibited: bool,
}

impl SortPolicy {
    /// Reject both cycles and missing dependencies.
    pub const fn strict() -> Self {
        Self {
            circular_dependency_prohibited: true,
            missing_dependency_prohibited: true,
        }
    }

    /// Tolerate cycles and silently drop missing dependencies.
    pub const fn permissive() -> Self {
        Self {
            circular_dependency_prohibited: false,
            missing_dependency_prohibited: false,
        }
    }
}

impl Default for SortPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Reorder `nodes` in place so every node comes after its dependencies.
///
/// On error `nodes` is left as it was.
pub fn sort_dependencies<N>(nodes: &mut Vec<N>, policy: SortPolicy) -> Result<(), SortError<N>>
where
    N: DependentNode + Debug,
{
    sort_dependencies_with(nodes, policy, N::dependencies)
}

/// Same as [`sort_dependencies`], with the dependency lookup supplied as a
/// closure. Useful for key-based graphs where the key type cannot look up
/// its own dependencies.
pub fn sort_dependencies_with<N, F>(
    nodes: &mut Vec<N>,
    policy: SortPolicy,
    dependencies: F,
) -> Result<(), SortError<N>>
where
    N: Clone + Eq + Hash + Debug,
    F: FnMut(&N) -> Option<Vec<N>>,
{
    let mut traversal = Traversal {
        policy,
        members: nodes.iter().cloned().collect(),
        visited: HashSet::with_capacity(nodes.len()),
        ordered: Vec::with_capacity(nodes.len()),
        dependencies,
    };

    for root in nodes.iter() {
        traversal.visit(root)?;
    }

    debug!(
        input = nodes.len(),
        output = traversal.ordered.len(),
        "dependency sort finished"
    );
    *nodes = traversal.ordered;
    Ok(())
}

/// A node whose dependencies are being walked.
struct Frame<N> {
    node: N,
    pending: vec::IntoIter<N>,
}

struct Traversal<N, F> {
    policy: SortPolicy,
    /// Nodes of the original input list.
    members: HashSet<N>,
    visited: HashSet<N>,
    ordered: Vec<N>,
    dependencies: F,
}

impl<N, F> Traversal<N, F>
where
    N: Clone + Eq + Hash + Debug,
    F: FnMut(&N) -> Option<Vec<N>>,
{
    fn visit(&mut self, root: &N) -> Result<(), SortError<N>> {
        if self.visited.contains(root) {
            return Ok(());
        }

        let mut stack = vec![self.enter(root.clone())?];

        while let Some(frame) = stack.last_mut() {
            match frame.pending.next() {
                Some(dep) => {
                    if self.visited.contains(&dep) {
                        continue;
                    }
                    if self.policy.missing_dependency_prohibited && !self.members.contains(&dep) {
                        return Err(SortError::MissingElement {
                            dependent: frame.node.clone(),
                            missing: dep,
                        });
                    }
                    let next = self.enter(dep)?;
                    stack.push(next);
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    self.finish(done.node);
                }
            }
        }

        Ok(())
    }

    /// Mark `node` visited and prepare to walk its dependencies.
    fn enter(&mut self, node: N) -> Result<Frame<N>, SortError<N>> {
        if self.policy.circular_dependency_prohibited {
            if let Some(chain) = find_cycle(&node, &mut self.dependencies) {
                debug!(?chain, "cycle found");
                return Err(SortError::CircularDependency { chain });
            }
        }

        self.visited.insert(node.clone());
        let pending = (self.dependencies)(&node).unwrap_or_default().into_iter();
        Ok(Frame { node, pending })
    }

    fn finish(&mut self, node: N) {
        if self.members.contains(&node) {
            self.ordered.push(node);
        } else {
            warn!(?node, "dropping dependency that is not part of the input list");
        }
    }
}
