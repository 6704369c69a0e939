//! mcgraph routes library entry.
//!
//! This crate defines the `Route` capability shared by every node of the
//! routing graph, the traverser used to inspect a graph without executing
//! it, the route implementations, and the settings decoding that turns a
//! node's configuration object into a ready `RouteHandle`.

pub mod config;
pub mod route;
pub mod routes;

pub use route::{describe, Route, RouteHandle, RouteTraverser};
pub use routes::{ErrorRoute, ExptimeAction, ModifyExptimeRoute, NullRoute};
