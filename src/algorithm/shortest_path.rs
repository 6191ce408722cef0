use crate::graph::*;
use ahash::RandomState;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// A relaxation candidate: some path's accumulated cost to a node.
///
/// The derived order compares `cost` first, giving the frontier heap its
/// cheapest-first discipline.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
struct Path {
    cost: Weight,
    sink: String,
}

pub trait ShortestPaths
where
    Self: QueryableGraph + Sized,
{
    /// Computes the minimum total edge weight from `start` to every node
    /// reachable from it.
    ///
    /// The frontier holds one candidate per relaxation; stale
    /// candidates for nodes that settled in the meantime stay queued and
    /// are discarded when popped. With nonnegative weights a node's first
    /// pop is therefore its cheapest, and its cost never changes again.
    ///
    /// Nodes not reachable from `start` are absent from the returned map,
    /// so on a disconnected graph the result is the connected component of
    /// `start`. Fails with [`GraphError::NoSuchNode`] if no node is named
    /// `start`.
    fn dijkstra(&self, start: &str) -> Result<HashMap<String, Weight, RandomState>, GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::NoSuchNode(start.to_owned()));
        }
        let mut costs = HashMap::with_hasher(RandomState::new());
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(Path {
            cost: 0,
            sink: start.to_owned(),
        }));
        while let Some(Reverse(path)) = frontier.pop() {
            if costs.contains_key(&path.sink) {
                continue;
            }
            if let Some(node) = self.node(&path.sink) {
                costs.insert(path.sink, path.cost);
                for (neighbor, weight) in node.iter_edges() {
                    frontier.push(Reverse(Path {
                        cost: path.cost + weight,
                        sink: neighbor.to_owned(),
                    }));
                }
            }
            if costs.len() == self.node_size() {
                break;
            }
        }
        Ok(costs)
    }
}

impl<G: QueryableGraph> ShortestPaths for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn unit_cycle() {
        let mut g = WeightedGraph::new();
        g.add_undirected_edge("a", "b", 1);
        g.add_undirected_edge("b", "c", 1);
        g.add_undirected_edge("c", "d", 1);
        g.add_undirected_edge("d", "a", 1);
        let costs = g.dijkstra("a").unwrap();
        assert_eq!(costs.len(), 4);
        assert_eq!(costs["a"], 0);
        assert_eq!(costs["b"], 1);
        assert_eq!(costs["c"], 2);
        assert_eq!(costs["d"], 1);
    }

    #[test]
    fn shortcut_beats_direct_edge() {
        let mut g = WeightedGraph::new();
        g.add_undirected_edge("a", "b", 10);
        g.add_undirected_edge("a", "c", 1);
        g.add_undirected_edge("c", "b", 1);
        let costs = g.dijkstra("a").unwrap();
        assert_eq!(costs["b"], 2);
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let mut g = WeightedGraph::new();
        g.add_undirected_edge("a", "b", 1);
        g.add_undirected_edge("c", "d", 1);
        let costs = g.dijkstra("a").unwrap();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs["a"], 0);
        assert_eq!(costs["b"], 1);
        assert!(!costs.contains_key("c"));
        assert!(!costs.contains_key("d"));
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = WeightedGraph::new();
        g.add_directed_edge("a", "b", 3);
        let costs = g.dijkstra("b").unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs["b"], 0);
    }

    #[test]
    fn unknown_start() {
        let g = WeightedGraph::new();
        assert_eq!(
            g.dijkstra("a"),
            Err(GraphError::NoSuchNode("a".to_owned()))
        );
    }

    #[quickcheck]
    fn costs_satisfy_the_relaxation_inequality(ops: Ops) {
        let g: WeightedGraph = (&ops).into();
        let start = match g.iter_nodes().map(|n| n.name().to_owned()).min() {
            Some(x) => x,
            None => return,
        };
        let costs = g.dijkstra(&start).unwrap();
        assert_eq!(costs[&start], 0);
        for node in g.iter_nodes() {
            let from = match costs.get(node.name()) {
                Some(c) => *c,
                None => continue,
            };
            for (neighbor, weight) in node.iter_edges() {
                let to = costs[neighbor];
                assert!(to <= from + weight);
            }
        }
    }
}
