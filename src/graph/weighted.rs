use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// A graph owning one [`Node`] per distinct name.
///
/// Nodes come into being the first time their name is mentioned, either
/// directly through [`GrowableGraph::get_or_create_node`] or as an endpoint
/// of a new edge, and live as long as the graph. There is no removal.
///
/// Iteration over nodes follows no guaranteed order; adjacency of a single
/// node iterates lexicographically (see [`Node`]).
#[derive(Clone)]
pub struct WeightedGraph {
    nodes: HashMap<String, Node, RandomState>,
}

impl GrowableGraph for WeightedGraph {
    fn new() -> Self {
        Self {
            nodes: HashMap::with_hasher(RandomState::new()),
        }
    }

    fn get_or_create_node(&mut self, name: &str) -> &Node {
        self.nodes
            .entry(name.to_owned())
            .or_insert_with(|| Node::new(name))
    }

    fn add_directed_edge(&mut self, source: &str, sink: &str, weight: Weight) {
        if !self.nodes.contains_key(sink) {
            self.nodes.insert(sink.to_owned(), Node::new(sink));
        }
        let node = self
            .nodes
            .entry(source.to_owned())
            .or_insert_with(|| Node::new(source));
        node.add_edge(sink, weight);
    }

    fn add_undirected_edge(&mut self, source: &str, sink: &str, weight: Weight) {
        self.add_directed_edge(source, sink, weight);
        self.add_directed_edge(sink, source, weight);
    }
}

impl QueryableGraph for WeightedGraph {
    fn node_size(&self) -> usize {
        self.nodes.len()
    }

    fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    fn iter_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.nodes.values())
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WeightedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

#[cfg(test)]
pub(crate) use self::tests::{Op, Ops};
