//! Sweep over all candidate vertices: remove each in turn, search the
//! contracted graph, and keep the removal with the shortest route.

use std::fmt;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::node_contraction::{remove_node_with_rule, ShortcutWeight};
use crate::search::backtracking::BacktrackingSearch;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

/// Outcome of a planner run: the winning route, the vertex whose removal
/// produced it, and the contracted graph it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct BlastPlan {
    pub path: ShortestPath,
    pub removed: NodeIndex,
    pub contracted: Graph,
}

/// One printable segment of the winning route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// An edge kept from the original graph.
    Direct { from: NodeIndex, to: NodeIndex },
    /// A reconnection edge: the route passes through the removed vertex.
    Blast {
        from: NodeIndex,
        through: NodeIndex,
        to: NodeIndex,
    },
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Direct { from, to } => write!(f, "{} to {}", from, to),
            Leg::Blast { from, through, to } => {
                writeln!(f, "{} to {}", from, through)?;
                write!(f, "{} *BLAST* to {}", through, to)
            }
        }
    }
}

impl BlastPlan {
    /// Split the winning route into printable legs.
    ///
    /// A hop is a detour through the removed vertex when the original graph
    /// does not contain the hop's edge with the same weight the contracted
    /// graph used.
    pub fn legs(&self, original: &Graph) -> Vec<Leg> {
        self.path
            .hops()
            .map(|(from, to)| {
                match (original.weight(from, to), self.contracted.weight(from, to)) {
                    (Some(original_weight), Some(contracted_weight))
                        if original_weight == contracted_weight =>
                    {
                        Leg::Direct { from, to }
                    }
                    _ => Leg::Blast {
                        from,
                        through: self.removed,
                        to,
                    },
                }
            })
            .collect()
    }
}

pub struct BlastPlanner<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    rule: ShortcutWeight,
}

impl<'a> BlastPlanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_rule(graph, ShortcutWeight::default())
    }

    pub fn with_rule(graph: &'a Graph, rule: ShortcutWeight) -> Self {
        BlastPlanner {
            g: graph,
            rule,
            stats: SearchStats::default(),
        }
    }

    /// Try every vertex except the endpoints and keep the removal that
    /// yields the shortest route from `source` to `target`.
    ///
    /// Candidates are swept in ascending id order and a later candidate has
    /// to be strictly better to replace the current best, so ties go to the
    /// lowest id. Candidates whose removal disconnects the endpoints are
    /// skipped; if no candidate leaves a route the whole run fails with
    /// [`Error::NoPathFound`].
    pub fn run(&mut self, source: NodeIndex, target: NodeIndex) -> Result<BlastPlan> {
        self.stats.init();

        let mut best: Option<BlastPlan> = None;

        for candidate in self.g.sorted_nodes() {
            if candidate == source || candidate == target {
                continue;
            }

            let contracted = remove_node_with_rule(self.g, candidate, self.rule)?;

            let mut search = BacktrackingSearch::new(&contracted);
            let path = search.search(source, target);
            self.stats.nodes_expanded += search.stats.nodes_expanded;

            let Some(path) = path else {
                debug!(
                    "Removing {} disconnects {} and {}",
                    candidate, source, target
                );
                continue;
            };

            debug!("Removing {} yields weight {}", candidate, path.weight);

            if best.as_ref().map_or(true, |b| path.weight < b.path.weight) {
                best = Some(BlastPlan {
                    path,
                    removed: candidate,
                    contracted,
                });
            }
        }

        self.stats.finish();

        match best {
            Some(plan) => {
                info!(
                    "Best removal {} with weight {} ({})",
                    plan.removed, plan.path.weight, self.stats
                );
                Ok(plan)
            }
            None => Err(Error::NoPathFound {
                from: source,
                to: target,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::edge;
    use crate::graph::node_index;
    use crate::util::test_graphs::{generate_complex_graph, generate_triangle_graph};

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn triangle_puzzle() {
        init_log();
        let g = generate_triangle_graph();

        let mut planner = BlastPlanner::new(&g);
        let plan = planner.run(node_index(0), node_index(2)).unwrap();

        assert_eq!(plan.removed, node_index(1));
        assert_eq!(plan.path.nodes, vec![node_index(0), node_index(2)]);
        assert_relative_eq!(plan.path.weight, 2.0);
        assert_eq!(plan.contracted.weight(node_index(0), node_index(2)), Some(2.0));
    }

    #[test]
    fn triangle_puzzle_legs() {
        let g = generate_triangle_graph();

        let mut planner = BlastPlanner::new(&g);
        let plan = planner.run(node_index(0), node_index(2)).unwrap();

        let legs = plan.legs(&g);
        assert_eq!(
            legs,
            vec![Leg::Blast {
                from: node_index(0),
                through: node_index(1),
                to: node_index(2),
            }]
        );
        assert_eq!(legs[0].to_string(), "0 to 1\n1 *BLAST* to 2");
    }

    #[test]
    fn cheap_leg_hidden_behind_a_vertex() {
        // Removing 3 turns its cheap first leg into a shortcut of weight 1.
        let g = generate_complex_graph();

        let mut planner = BlastPlanner::new(&g);
        let plan = planner.run(node_index(0), node_index(4)).unwrap();

        assert_eq!(plan.removed, node_index(3));
        assert_eq!(plan.path.nodes, vec![node_index(0), node_index(4)]);
        assert_relative_eq!(plan.path.weight, 1.0);

        let legs = plan.legs(&g);
        assert_eq!(
            legs,
            vec![Leg::Blast {
                from: node_index(0),
                through: node_index(3),
                to: node_index(4),
            }]
        );
    }

    #[test]
    fn direct_legs_are_kept() {
        // Removing 1 reconnects 0 and 2; the remaining hops of the winning
        // route are original edges.
        let g = Graph::from_edges([
            edge!(0, 1, 1.0),
            edge!(1, 2, 1.0),
            edge!(2, 3, 1.0),
            edge!(0, 3, 20.0),
        ]);

        let mut planner = BlastPlanner::new(&g);
        let plan = planner.run(node_index(0), node_index(3)).unwrap();

        assert_eq!(plan.removed, node_index(1));
        assert_eq!(
            plan.path.nodes,
            vec![node_index(0), node_index(2), node_index(3)]
        );
        assert_relative_eq!(plan.path.weight, 2.0);

        let legs = plan.legs(&g);
        assert_eq!(
            legs,
            vec![
                Leg::Blast {
                    from: node_index(0),
                    through: node_index(1),
                    to: node_index(2),
                },
                Leg::Direct {
                    from: node_index(2),
                    to: node_index(3),
                },
            ]
        );
        assert_eq!(legs[1].to_string(), "2 to 3");
    }

    #[test]
    fn no_candidates_is_fatal() {
        let g = Graph::from_edges([edge!(0, 1, 4.0)]);

        let mut planner = BlastPlanner::new(&g);
        let err = planner.run(node_index(0), node_index(1)).unwrap_err();

        assert!(matches!(err, Error::NoPathFound { .. }));
    }

    #[test]
    fn all_candidates_disconnecting_is_fatal() {
        // 0 - 1    2 - 3: no removal can bridge the components
        let g = Graph::from_edges([edge!(0, 1, 1.0), edge!(2, 3, 1.0)]);

        let mut planner = BlastPlanner::new(&g);
        let err = planner.run(node_index(0), node_index(3)).unwrap_err();

        assert!(matches!(
            err,
            Error::NoPathFound { from, to }
                if from == node_index(0) && to == node_index(3)
        ));
    }

    #[test]
    fn tie_between_candidates_goes_to_lowest_id() {
        // Removing 1 and removing 2 both yield a route of weight 5.
        let g = Graph::from_edges([
            edge!(0, 1, 2.0),
            edge!(1, 2, 3.0),
            edge!(2, 4, 3.0),
            edge!(0, 3, 8.0),
            edge!(3, 4, 8.0),
        ]);

        let mut planner = BlastPlanner::new(&g);
        let plan = planner.run(node_index(0), node_index(4)).unwrap();

        assert_eq!(plan.removed, node_index(1));
        assert_eq!(
            plan.path.nodes,
            vec![node_index(0), node_index(2), node_index(4)]
        );
        assert_relative_eq!(plan.path.weight, 5.0);
    }

    #[test]
    fn missing_end_vertex_is_fatal() {
        // Four distinct vertices but no id 3: the end vertex does not exist.
        let g = Graph::from_tuple_line("(0, 1, 1) (1, 2, 1) (2, 5, 1)").unwrap();
        assert_eq!(g.num_nodes(), 4);

        let mut planner = BlastPlanner::new(&g);
        let err = planner
            .run(node_index(0), node_index(g.num_nodes() - 1))
            .unwrap_err();

        assert!(matches!(err, Error::NoPathFound { .. }));
    }

    #[test]
    fn planner_is_deterministic() {
        let g = generate_complex_graph();

        let mut first = BlastPlanner::new(&g);
        let mut second = BlastPlanner::new(&g);

        let a = first.run(node_index(0), node_index(4)).unwrap();
        let b = second.run(node_index(0), node_index(4)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn stats_accumulate_over_candidates() {
        init_log();
        let g = generate_complex_graph();

        let mut planner = BlastPlanner::new(&g);
        planner.run(node_index(0), node_index(4)).unwrap();

        assert!(planner.stats.duration.is_some());
        assert!(planner.stats.nodes_expanded > 0);
    }
}
