use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;

    /// Returns the node named `name`, creating and storing an empty one
    /// first if the graph does not hold it yet. Idempotent for names the
    /// graph already knows.
    fn get_or_create_node(&mut self, name: &str) -> &Node;

    /// Adds an edge from `source` to `sink` with the given weight, creating
    /// either endpoint that does not exist yet. A later call for the same
    /// pair overwrites the weight.
    fn add_directed_edge(&mut self, source: &str, sink: &str, weight: Weight);

    /// Adds the edge in both directions with the same weight.
    fn add_undirected_edge(&mut self, source: &str, sink: &str, weight: Weight);
}

pub trait QueryableGraph {
    fn node_size(&self) -> usize;
    fn contains_node(&self, name: &str) -> bool;
    fn node(&self, name: &str) -> Option<&Node>;
    fn iter_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
