//! Vertex removal with neighbor reconnection.
//!
//! Deleting a vertex rips a hole into the graph; its former neighbors are
//! reconnected pairwise so that routes may still pass through the gap. The
//! transform never mutates its input, so every candidate removal starts from
//! the same original graph.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeIndex};

/// Weight assigned to the reconnection edge between two former neighbors of
/// a removed vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortcutWeight {
    /// The first neighbor's distance to the removed vertex, overwriting any
    /// existing edge between the pair. The default.
    #[default]
    FirstLeg,
    /// Sum of both legs through the removed vertex, merged with an existing
    /// edge by minimum.
    BothLegs,
}

/// Remove `node` from `graph` with the default [`ShortcutWeight::FirstLeg`]
/// rule. Returns a new graph; the input is left untouched.
pub fn remove_node(graph: &Graph, node: NodeIndex) -> Result<Graph> {
    remove_node_with_rule(graph, node, ShortcutWeight::default())
}

/// Remove `node` and connect its former neighbors pairwise.
///
/// Neighbors are enumerated in ascending id order; for every pair the new
/// edge weight follows `rule`. The result has exactly one vertex less than
/// `graph`.
pub fn remove_node_with_rule(
    graph: &Graph,
    node: NodeIndex,
    rule: ShortcutWeight,
) -> Result<Graph> {
    let mut contracted = graph.clone();
    let neighbors = contracted
        .remove_node(node)
        .ok_or(Error::UnknownNode(node))?;

    for (i, (neighbor, dist)) in neighbors.iter().enumerate() {
        for (other, other_dist) in &neighbors[i + 1..] {
            let weight = match rule {
                ShortcutWeight::FirstLeg => *dist,
                ShortcutWeight::BothLegs => {
                    let through = dist + other_dist;
                    contracted
                        .weight(*neighbor, *other)
                        .map_or(through, |existing| existing.min(through))
                }
            };

            debug!(
                "Reconnecting {} and {} with weight {}",
                neighbor, other, weight
            );
            contracted.add_edge(Edge::new(*neighbor, *other, weight));
        }
    }

    Ok(contracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge;
    use crate::graph::node_index;
    use crate::util::test_graphs::generate_chain_graph;

    #[test]
    fn first_leg_rule() {
        // 2 has neighbors [0, 1, 3] with distances {0: 5, 1: 1, 3: 4}
        let g = generate_chain_graph();

        let contracted = remove_node(&g, node_index(2)).unwrap();

        assert_eq!(contracted.num_nodes(), 3);
        assert!(!contracted.contains_node(node_index(2)));
        for node in contracted.nodes() {
            assert_eq!(contracted.weight(node, node_index(2)), None);
        }

        // (0,1) overwritten from 2 to dist(0, removed) = 5
        assert_eq!(contracted.weight(node_index(0), node_index(1)), Some(5.0));
        assert_eq!(contracted.weight(node_index(0), node_index(3)), Some(5.0));
        assert_eq!(contracted.weight(node_index(1), node_index(3)), Some(1.0));
        // mirrored
        assert_eq!(contracted.weight(node_index(3), node_index(0)), Some(5.0));
    }

    #[test]
    fn both_legs_rule_keeps_cheaper_existing_edge() {
        let g = generate_chain_graph();

        let contracted = remove_node_with_rule(&g, node_index(2), ShortcutWeight::BothLegs).unwrap();

        // (0,1): legs 5 + 1 = 6, but the existing edge of weight 2 is cheaper
        assert_eq!(contracted.weight(node_index(0), node_index(1)), Some(2.0));
        // (0,3): no prior edge, legs 5 + 4
        assert_eq!(contracted.weight(node_index(0), node_index(3)), Some(9.0));
        // (1,3): no prior edge, legs 1 + 4
        assert_eq!(contracted.weight(node_index(1), node_index(3)), Some(5.0));
    }

    #[test]
    fn input_graph_is_untouched() {
        let g = generate_chain_graph();
        let before = g.clone();

        remove_node(&g, node_index(2)).unwrap();

        assert_eq!(g, before);
    }

    #[test]
    fn removing_a_leaf_adds_no_edges() {
        let g = generate_chain_graph();

        let contracted = remove_node(&g, node_index(3)).unwrap();

        assert_eq!(contracted.num_nodes(), 3);
        assert_eq!(contracted.num_edges(), g.num_edges() - 1);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let g = Graph::from_edges([edge!(0, 1, 1.0)]);

        let err = remove_node(&g, node_index(7)).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(node) if node == node_index(7)));
    }
}
