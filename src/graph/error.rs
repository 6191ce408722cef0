/// Errors reported by graph queries and algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal or shortest-path computation was started from a name
    /// that no node in the graph carries.
    NoSuchNode(String),

    /// A weight was looked up between two nodes that are not adjacent.
    NoSuchEdge { source: String, sink: String },

    /// A spanning tree was requested of a graph without any node.
    EmptyGraph,

    /// A spanning tree was requested of a graph that is not connected.
    Disconnected { spanned: usize, total: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NoSuchNode(name) => write!(f, "no such node: {name}"),
            GraphError::NoSuchEdge { source, sink } => {
                write!(f, "no edge from {source} to {sink}")
            }
            GraphError::EmptyGraph => write!(f, "graph has no nodes"),
            GraphError::Disconnected { spanned, total } => {
                write!(f, "graph is disconnected: spanned {spanned} of {total} nodes")
            }
        }
    }
}

impl std::error::Error for GraphError {}
