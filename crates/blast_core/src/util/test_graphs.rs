use crate::edge;
use crate::graph::Graph;

/// Triangle with a pricey direct edge between the endpoints. Removing 1
/// shortcuts 0 and 2 at the weight of the 0-1 leg.
pub fn generate_triangle_graph() -> Graph {
    Graph::from_edges([edge!(0, 1, 2.0), edge!(1, 2, 2.0), edge!(0, 2, 10.0)])
}

/// Five vertices with a cheap leg hidden behind vertex 3.
pub fn generate_complex_graph() -> Graph {
    Graph::from_edges([
        edge!(0, 1, 3.0),
        edge!(1, 4, 3.0),
        edge!(0, 2, 5.0),
        edge!(2, 4, 4.0),
        edge!(0, 3, 1.0),
        edge!(3, 4, 9.0),
    ])
}

/// Four vertices where 2 touches everything: neighbors [0, 1, 3] with
/// distances {0: 5, 1: 1, 3: 4}. Exercises the contraction weight rule.
pub fn generate_chain_graph() -> Graph {
    Graph::from_edges([
        edge!(0, 1, 2.0),
        edge!(0, 2, 5.0),
        edge!(1, 2, 1.0),
        edge!(2, 3, 4.0),
    ])
}
