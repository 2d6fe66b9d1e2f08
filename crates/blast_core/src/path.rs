//! Working stack of the backtracking search.

use crate::constants::Weight;
use crate::graph::NodeIndex;
use crate::search::shortest_path::ShortestPath;

/// Ordered sequence of visited vertices with an incrementally maintained
/// total distance.
///
/// Extending and undoing a step are O(1); per-step increments are kept so
/// that [`pop`](Self::pop) restores the previous distance exactly. A complete
/// candidate is snapshotted into a [`ShortestPath`].
#[derive(Debug, Clone, Default)]
pub struct Path {
    nodes: Vec<NodeIndex>,
    increments: Vec<Weight>,
    dist: Weight,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn dist(&self) -> Weight {
        self.dist
    }

    pub fn last(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    /// Append `node`, reached over an edge of weight `increment` from the
    /// current end. The first vertex is pushed with an increment of 0.
    pub fn push(&mut self, node: NodeIndex, increment: Weight) {
        self.nodes.push(node);
        self.increments.push(increment);
        self.dist += increment;
    }

    /// Undo the most recent [`push`](Self::push).
    pub fn pop(&mut self) -> Option<NodeIndex> {
        let node = self.nodes.pop()?;
        let increment = self.increments.pop()?;
        self.dist -= increment;
        Some(node)
    }

    /// Snapshot the current state as a search result.
    pub fn to_shortest_path(&self) -> ShortestPath {
        ShortestPath::new(self.nodes.clone(), self.dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn push_and_pop_keep_distance_in_sync() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push(node_index(0), 0.0);
        path.push(node_index(1), 2.0);
        path.push(node_index(4), 3.0);

        assert_eq!(path.len(), 3);
        assert_eq!(path.dist(), 5.0);
        assert_eq!(path.last(), Some(node_index(4)));
        assert!(path.contains(node_index(1)));
        assert!(!path.contains(node_index(2)));

        assert_eq!(path.pop(), Some(node_index(4)));
        assert_eq!(path.dist(), 2.0);
        assert_eq!(path.last(), Some(node_index(1)));

        assert_eq!(path.pop(), Some(node_index(1)));
        assert_eq!(path.pop(), Some(node_index(0)));
        assert_eq!(path.pop(), None);
        assert_eq!(path.dist(), 0.0);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut path = Path::new();
        path.push(node_index(0), 0.0);
        path.push(node_index(1), 4.0);

        let snapshot = path.to_shortest_path();
        path.pop();

        assert_eq!(snapshot.nodes, vec![node_index(0), node_index(1)]);
        assert_eq!(snapshot.weight, 4.0);
        assert_eq!(path.dist(), 0.0);
    }
}
