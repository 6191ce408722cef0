//! The weighted graph of named nodes, and traits to query and grow it.
//!
//! # Names as identities
//!
//! Some graph libraries identify vertices by opaque IDs and bolt user data
//! on top. Here the node name *is* the identity: a [`WeightedGraph`] owns a
//! [`Node`] per distinct name, and edges refer to their endpoints by name.
//! This keeps the result of an algorithm such as a minimum spanning tree
//! meaningful on its own, since it is a brand-new graph sharing nothing but
//! names with its source.
//!
//! # The trait seam
//!
//! [`GrowableGraph`] covers construction and [`QueryableGraph`] covers
//! inspection. Algorithms in [`crate::algorithm`] are written against
//! [`QueryableGraph`] only, so any store implementing the pair gets all of
//! them for free.

mod error;
pub use self::error::*;
mod node;
pub use self::node::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod weighted;
pub use self::weighted::*;
