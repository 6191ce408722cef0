use crate::graph::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A candidate edge leading out of the spanned set.
///
/// The derived order compares `weight` first, giving the frontier heap its
/// lightest-first discipline.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
struct Edge {
    weight: Weight,
    source: String,
    sink: String,
}

pub trait MinimumSpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Computes a minimum spanning tree with the Prim-Jarnik algorithm.
    ///
    /// The tree is returned as a brand-new graph of type `R` holding fresh
    /// nodes under the same names as this graph's, connected by undirected
    /// edges. Growth starts from the node with the lexicographically
    /// smallest name, so repeated runs span the same tree. Candidate edges
    /// whose sink joined the tree in the meantime stay queued and are
    /// discarded when popped.
    ///
    /// Fails with [`GraphError::EmptyGraph`] if this graph has no nodes,
    /// and with [`GraphError::Disconnected`] if the frontier runs dry
    /// before every node is spanned, since only a connected graph has a
    /// spanning tree.
    fn prim_jarnik<R>(&self) -> Result<R, GraphError>
    where
        R: GrowableGraph + QueryableGraph,
    {
        let start = self
            .iter_nodes()
            .min_by_key(|node| node.name())
            .ok_or(GraphError::EmptyGraph)?;
        let mut result = R::new();
        result.get_or_create_node(start.name());
        let mut frontier = BinaryHeap::new();
        for (sink, weight) in start.iter_edges() {
            frontier.push(Reverse(Edge {
                weight,
                source: start.name().to_owned(),
                sink: sink.to_owned(),
            }));
        }
        while result.node_size() < self.node_size() {
            let Reverse(edge) = frontier.pop().ok_or(GraphError::Disconnected {
                spanned: result.node_size(),
                total: self.node_size(),
            })?;
            if result.contains_node(&edge.sink) {
                continue;
            }
            result.add_undirected_edge(&edge.source, &edge.sink, edge.weight);
            if let Some(node) = self.node(&edge.sink) {
                for (sink, weight) in node.iter_edges() {
                    frontier.push(Reverse(Edge {
                        weight,
                        source: edge.sink.clone(),
                        sink: sink.to_owned(),
                    }));
                }
            }
        }
        Ok(result)
    }
}

impl<G: QueryableGraph> MinimumSpanningTree for G {}
