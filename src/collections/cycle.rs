// src/collections/cycle.rs

//! Cycle probe for implicit dependency graphs.
//!
//! The probe expands the dependency relation one frontier at a time instead
//! of recursing, so its stack usage does not grow with the depth of the
//! graph. Every probe entry keeps a back-link to the entry that discovered
//! it, which is enough to rebuild the exact chain once the start node shows
//! up again.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

/// One discovered node plus the index of the entry that discovered it.
///
/// `parent == None` means the node is a direct dependency of the start node.
#[derive(Debug)]
struct ProbeEntry<N> {
    node: N,
    parent: Option<usize>,
}

/// Look for a dependency path leading from `start` back to `start`.
///
/// Returns the chain `[start, .., start]` for the shortest such path, or
/// `None` when `start` is not part of a cycle.
pub fn find_cycle<N, F>(start: &N, mut dependencies: F) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Option<Vec<N>>,
{
    let mut entries: Vec<ProbeEntry<N>> = Vec::new();
    let mut expanded: HashSet<N> = HashSet::new();

    let mut frontier: Vec<usize> = Vec::new();
    for dep in dependencies(start).unwrap_or_default() {
        frontier.push(entries.len());
        entries.push(ProbeEntry {
            node: dep,
            parent: None,
        });
    }

    let mut depth = 1usize;
    while !frontier.is_empty() {
        trace!(depth, width = frontier.len(), "expanding cycle probe frontier");
        let mut next: Vec<usize> = Vec::new();

        for idx in frontier {
            if entries[idx].node == *start {
                return Some(rebuild_chain(start, &entries, idx));
            }

            if !expanded.insert(entries[idx].node.clone()) {
                continue;
            }

            let deps = dependencies(&entries[idx].node).unwrap_or_default();
            for dep in deps {
                next.push(entries.len());
                entries.push(ProbeEntry {
                    node: dep,
                    parent: Some(idx),
                });
            }
        }

        frontier = next;
        depth += 1;
    }

    None
}

fn rebuild_chain<N: Clone>(start: &N, entries: &[ProbeEntry<N>], last: usize) -> Vec<N> {
    let mut reversed = Vec::new();
    let mut cursor = Some(last);
    while let Some(idx) = cursor {
        reversed.push(entries[idx].node.clone());
        cursor = entries[idx].parent;
    }

    let mut chain = Vec::with_capacity(reversed.len() + 1);
    chain.push(start.clone());
    chain.extend(reversed.into_iter().rev());
    chain
}
