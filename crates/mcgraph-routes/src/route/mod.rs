//! Route capability shared by every node of the graph.
//!
//! Re-exports the trait, the shared handle type and the traverser so route
//! implementations and tooling can depend on this module directly.

pub mod handle;
pub mod traverser;

pub use handle::{Route, RouteHandle};
pub use traverser::{describe, RouteTraverser};
