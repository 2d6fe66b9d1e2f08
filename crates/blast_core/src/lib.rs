//! Route planning for a graph that is allowed to lose exactly one vertex.
//!
//! The planner removes each intermediate vertex in turn, reconnects its
//! former neighbors, searches the contracted graph exhaustively and keeps
//! the cheapest outcome. Hops of the winning route that only exist because
//! of the removal are reported as detours through the removed vertex.
//!
//! # Basic usage
//! ```
//! use blast_core::prelude::*;
//!
//! // Parse the edge list
//! let g = Graph::from_tuple_line("(0, 1, 2) (1, 2, 2) (0, 2, 10)").unwrap();
//!
//! // Plan the best single removal between the endpoints
//! let mut planner = BlastPlanner::new(&g);
//! let plan = planner.run(node_index(0), node_index(2)).unwrap();
//!
//! assert_eq!(plan.removed, node_index(1));
//! assert_eq!(plan.path.weight, 2.0);
//! ```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod node_contraction;
pub mod path;
pub mod planner;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
