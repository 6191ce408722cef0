//! A weighted graph of named nodes and the classical algorithms on top of it.
//!
//! Nodes are identified by their names.
//! [`WeightedGraph`](graph::WeightedGraph) creates a node the first time its
//! name is mentioned, so wiring a graph is a matter of adding edges:
//!
//! ```rust
//! use spangraph::{algorithm::*, graph::*};
//!
//! let mut g = WeightedGraph::new();
//! g.add_undirected_edge("a", "b", 1);
//! g.add_undirected_edge("b", "c", 2);
//! g.add_undirected_edge("a", "c", 3);
//!
//! let costs = g.dijkstra("a").unwrap();
//! assert_eq!(costs.get("c"), Some(&3));
//!
//! let mst: WeightedGraph = g.prim_jarnik().unwrap();
//! assert_eq!(mst.node_size(), 3);
//! ```
//!
//! Algorithms are extension traits with blanket implementations over
//! [`QueryableGraph`](graph::QueryableGraph), so they are available on any
//! graph type implementing that trait: [`Traversal`](algorithm::Traversal)
//! for breadth- and depth-first search, [`ShortestPaths`](algorithm::ShortestPaths)
//! for Dijkstra, and [`MinimumSpanningTree`](algorithm::MinimumSpanningTree)
//! for Prim-Jarnik.

pub mod algorithm;
pub mod graph;
