//! Re-exports of the most commonly used items in `blast_core`.
pub use crate::constants::Weight;
pub use crate::error::{Error, Result};
pub use crate::graph::node_index;
pub use crate::graph::{Edge, Graph, NodeIndex};
pub use crate::node_contraction::{remove_node, remove_node_with_rule, ShortcutWeight};
pub use crate::planner::{BlastPlan, BlastPlanner, Leg};
pub use crate::search::backtracking::BacktrackingSearch;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::util::test_graphs::generate_triangle_graph;
