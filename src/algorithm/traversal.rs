use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// A capability handed into a traversal, invoked exactly once per node the
/// traversal reaches.
///
/// Any `FnMut(&Node)` closure is a visitor. Return values are not consumed;
/// side effects are the visitor's business.
pub trait NodeVisitor {
    fn visit(&mut self, node: &Node);
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node),
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Explores nodes reachable from `start` in FIFO order.
    ///
    /// A node counts as visited the moment it is dequeued, not when it is
    /// enqueued, and the visitor runs exactly once per reachable node, in
    /// dequeue order. A node's not-yet-visited neighbors are enqueued right
    /// after it is visited, in lexicographic order, so a node may sit in
    /// the frontier more than once; the extra occurrences are skipped.
    ///
    /// Fails with [`GraphError::NoSuchNode`] if no node is named `start`.
    fn breadth_first_search<V>(&self, start: &str, visitor: &mut V) -> Result<(), GraphError>
    where
        V: NodeVisitor,
    {
        let start = self
            .node(start)
            .ok_or_else(|| GraphError::NoSuchNode(start.to_owned()))?;
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        while let Some(node) = frontier.pop_front() {
            if !visited.insert(node.name()) {
                continue;
            }
            visitor.visit(node);
            for neighbor in node.neighbors() {
                if !visited.contains(neighbor) {
                    if let Some(next) = self.node(neighbor) {
                        frontier.push_back(next);
                    }
                }
            }
        }
        Ok(())
    }

    /// Explores nodes reachable from `start` in LIFO order.
    ///
    /// Same visited-once contract as [`Traversal::breadth_first_search`],
    /// with a stack as the frontier. Neighbors are pushed in lexicographic
    /// order right after their parent is visited and therefore pop in
    /// reverse order; the visit order is the stack order, which is not the
    /// recursive pre-order.
    fn depth_first_search<V>(&self, start: &str, visitor: &mut V) -> Result<(), GraphError>
    where
        V: NodeVisitor,
    {
        let start = self
            .node(start)
            .ok_or_else(|| GraphError::NoSuchNode(start.to_owned()))?;
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut frontier = vec![start];
        while let Some(node) = frontier.pop() {
            if !visited.insert(node.name()) {
                continue;
            }
            visitor.visit(node);
            for neighbor in node.neighbors() {
                if !visited.contains(neighbor) {
                    if let Some(next) = self.node(neighbor) {
                        frontier.push(next);
                    }
                }
            }
        }
        Ok(())
    }
}

impl<G: QueryableGraph> Traversal for G {}
