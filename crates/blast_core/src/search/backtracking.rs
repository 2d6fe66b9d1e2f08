//! Exhaustive shortest path search by recursive backtracking.
//!
//! Explores every simple path between two vertices and keeps the one with
//! the minimum total weight. Exponential in the worst case; the intended
//! inputs are puzzle scale graphs with a few dozen vertices.

use log::debug;

use crate::graph::{Graph, NodeIndex};
use crate::path::Path;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

pub struct BacktrackingSearch<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        BacktrackingSearch {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Minimum weight simple path from `source` to `target`, or `None` if
    /// the target cannot be reached. Ties go to the first path found under
    /// ascending neighbor order.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if !self.g.contains_node(source) || !self.g.contains_node(target) {
            self.stats.finish();
            return None;
        }

        let mut path = Path::new();
        path.push(source, 0.0);
        let shortest = self.explore(&mut path, target);
        self.stats.finish();

        match &shortest {
            Some(sp) => debug!("Path found: {:?}", sp),
            None => debug!("No path from {} to {}", source, target),
        }

        shortest
    }

    fn explore(&mut self, path: &mut Path, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.nodes_expanded += 1;

        let current = path.last()?;
        if current == target {
            return Some(path.to_shortest_path());
        }

        let mut shortest: Option<ShortestPath> = None;
        for (neighbor, weight) in self.g.sorted_neighbors(current) {
            if path.contains(neighbor) {
                continue;
            }

            path.push(neighbor, weight);
            let candidate = self.explore(path, target);
            path.pop();

            shortest = match (shortest, candidate) {
                (None, candidate) => candidate,
                (Some(best), Some(candidate)) if candidate.weight < best.weight => Some(candidate),
                (best, _) => best,
            };
        }
        shortest
    }
}
