use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

use helpkit::collections::{SortError, SortPolicy, sort_dependencies_with};

// Strategy for an acyclic graph: node i may only depend on nodes 0..i.
// The input list is reversed so the sort has real work to do.
fn dag_strategy(max_nodes: u32) -> impl Strategy<Value = HashMap<u32, Vec<u32>>> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(any::<u32>(), 0..4),
            num_nodes as usize,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, picks)| {
                    let i = i as u32;
                    let mut deps: Vec<u32> = if i == 0 {
                        Vec::new()
                    } else {
                        picks.into_iter().map(|p| p % i).collect()
                    };
                    deps.dedup();
                    (i, deps)
                })
                .collect()
        })
    })
}

// Strategy for an arbitrary directed graph, cycles and self-loops allowed.
fn graph_strategy(max_nodes: u32) -> impl Strategy<Value = HashMap<u32, Vec<u32>>> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(0..num_nodes, 0..3),
            num_nodes as usize,
        )
        .prop_map(|adj| {
            adj.into_iter()
                .enumerate()
                .map(|(i, deps)| (i as u32, deps))
                .collect()
        })
    })
}

fn has_cycle(graph: &HashMap<u32, Vec<u32>>) -> bool {
    let mut g: DiGraphMap<u32, ()> = DiGraphMap::new();
    for (&node, deps) in graph.iter() {
        g.add_node(node);
        for &dep in deps {
            g.add_edge(node, dep, ());
        }
    }
    toposort(&g, None).is_err()
}

proptest! {
    #[test]
    fn test_acyclic_sort_puts_dependencies_first(graph in dag_strategy(16)) {
        let mut nodes: Vec<u32> = (0..graph.len() as u32).rev().collect();

        sort_dependencies_with(&mut nodes, SortPolicy::strict(), |n| graph.get(n).cloned())
            .unwrap();

        prop_assert_eq!(nodes.len(), graph.len());
        let position: HashMap<u32, usize> =
            nodes.iter().enumerate().map(|(idx, n)| (*n, idx)).collect();
        for (node, deps) in graph.iter() {
            for dep in deps {
                prop_assert!(
                    position[dep] < position[node],
                    "{} should come before {}", dep, node
                );
            }
        }
    }

    #[test]
    fn test_cycle_detection_matches_petgraph(graph in graph_strategy(8)) {
        let mut nodes: Vec<u32> = (0..graph.len() as u32).collect();

        let result =
            sort_dependencies_with(&mut nodes, SortPolicy::strict(), |n| graph.get(n).cloned());

        match result {
            Ok(()) => prop_assert!(!has_cycle(&graph)),
            Err(SortError::CircularDependency { chain }) => {
                prop_assert!(has_cycle(&graph));
                prop_assert!(chain.len() >= 2);
                prop_assert_eq!(chain.first(), chain.last());
                for pair in chain.windows(2) {
                    prop_assert!(graph[&pair[0]].contains(&pair[1]));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn test_permissive_sort_is_a_permutation(graph in graph_strategy(8)) {
        let mut nodes: Vec<u32> = (0..graph.len() as u32).collect();

        sort_dependencies_with(&mut nodes, SortPolicy::permissive(), |n| graph.get(n).cloned())
            .unwrap();

        let mut sorted = nodes.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..graph.len() as u32).collect::<Vec<_>>());
    }
}
