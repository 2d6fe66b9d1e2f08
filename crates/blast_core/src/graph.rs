use std::fmt;
use std::path::Path;

use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::{Error, Result};

/// Vertex identifier. Plain value semantics: two indices are equal exactly
/// when their ids are equal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Undirected edge as it appears in the input. Inserting it into a [`Graph`]
/// mirrors the weight in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Undirected weighted graph backed by a nested adjacency map.
///
/// Invariants: the weight of a pair is stored for both directions, self
/// loops are ignored at insertion, and a duplicate edge overwrites the
/// stored weight (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adj: FxHashMap<NodeIndex, FxHashMap<NodeIndex, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `edge`, overwriting any previous weight for the pair.
    pub fn add_edge(&mut self, edge: Edge) {
        if edge.source == edge.target {
            debug!("Ignoring self loop at {}", edge.source);
            return;
        }

        self.adj
            .entry(edge.source)
            .or_default()
            .insert(edge.target, edge.weight);
        self.adj
            .entry(edge.target)
            .or_default()
            .insert(edge.source, edge.weight);
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut g = Graph::new();
        for edge in edges {
            g.add_edge(edge);
        }
        g
    }

    /// Parse every `(u, v, w)` triple on a single input line. Text between
    /// the triples is ignored; a line without any triple is an error.
    pub fn from_tuple_line(line: &str) -> Result<Self> {
        let pattern = Regex::new(r"\((\d+), (\d+), (\d+)\)").expect("tuple pattern is valid");

        let mut edges = Vec::new();
        for caps in pattern.captures_iter(line) {
            let source = caps[1].parse::<u32>().map_err(|_| Error::MalformedInput)?;
            let target = caps[2].parse::<u32>().map_err(|_| Error::MalformedInput)?;
            let weight = caps[3]
                .parse::<Weight>()
                .map_err(|_| Error::MalformedInput)?;
            edges.push(Edge::new(source.into(), target.into(), weight));
        }

        if edges.is_empty() {
            return Err(Error::MalformedInput);
        }
        Ok(Self::from_edges(edges))
    }

    /// Read an edge list from a CSV file with `source,target,weight` records.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut edges = Vec::new();
        for record in reader.deserialize() {
            let edge: Edge = record?;
            edges.push(edge);
        }

        if edges.is_empty() {
            return Err(Error::MalformedInput);
        }
        Ok(Self::from_edges(edges))
    }

    /// Write the edge list as CSV, one record per unordered pair.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        for (source, target, weight) in self.edge_triples() {
            wtr.serialize(Edge::new(source, target, weight))?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adj.values().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.adj.contains_key(&node)
    }

    /// Returns an iterator over all vertices, in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adj.keys().copied()
    }

    /// All vertices in ascending id order.
    pub fn sorted_nodes(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<_> = self.adj.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.adj.get(&source)?.get(&target).copied()
    }

    /// Neighbors of `node` with edge weights, in arbitrary order.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adj
            .get(&node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(v, w)| (*v, *w)))
    }

    /// Neighbors of `node` in ascending id order. This is the enumeration
    /// order used by the search and by the contraction transform.
    pub fn sorted_neighbors(&self, node: NodeIndex) -> Vec<(NodeIndex, Weight)> {
        let mut neighbors: Vec<_> = self.neighbors(node).collect();
        neighbors.sort_unstable_by_key(|(v, _)| *v);
        neighbors
    }

    /// All unordered edges as `(source, target, weight)` with source < target,
    /// ascending.
    pub fn edge_triples(&self) -> Vec<(NodeIndex, NodeIndex, Weight)> {
        let mut triples = Vec::with_capacity(self.num_edges());
        for source in self.sorted_nodes() {
            for (target, weight) in self.sorted_neighbors(source) {
                if source < target {
                    triples.push((source, target, weight));
                }
            }
        }
        triples
    }

    /// Delete `node` and every edge referencing it. Returns the former
    /// neighbors with their distances, ascending by id, or `None` if the
    /// vertex is unknown.
    ///
    /// A neighbor left without edges keeps its (empty) adjacency entry, so
    /// the vertex count drops by exactly one.
    pub fn remove_node(&mut self, node: NodeIndex) -> Option<Vec<(NodeIndex, Weight)>> {
        let former = self.adj.remove(&node)?;

        for neighbors in self.adj.values_mut() {
            neighbors.remove(&node);
        }

        let mut former: Vec<_> = former.into_iter().collect();
        former.sort_unstable_by_key(|(v, _)| *v);
        Some(former)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: #Nodes: {}, #Edges: {}",
            self.num_nodes(),
            self.num_edges()
        )?;
        for node in self.sorted_nodes() {
            write!(f, "  {}:", node)?;
            for (neighbor, weight) in self.sorted_neighbors(node) {
                write!(f, " {} ({})", neighbor, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Macro to create an undirected edge with a weight
///
/// edge!(0, 1, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
}
