use thiserror::Error;

use crate::graph::NodeIndex;

/// Errors surfaced by graph construction, contraction and planning.
#[derive(Debug, Error)]
pub enum Error {
    /// No single removal leaves a finite route between the endpoints.
    #[error("no route from {from} to {to} survives any single blast")]
    NoPathFound { from: NodeIndex, to: NodeIndex },

    /// The input contained no parsable edge triples.
    #[error("no edge triples found in input")]
    MalformedInput,

    /// A vertex was referenced that is not part of the graph.
    #[error("vertex {0} is not part of the graph")]
    UnknownNode(NodeIndex),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
