//! Top-level facade crate for mcgraph.
//!
//! Re-exports core types and the routes library so users can depend on a single crate.

pub mod core {
    pub use mcgraph_core::*;
}

pub mod routes {
    pub use mcgraph_routes::*;
}
