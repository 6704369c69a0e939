use std::sync::Arc;

use async_trait::async_trait;

use mcgraph_core::error::Result;
use mcgraph_core::protocol::{Reply, Request};

use super::traverser::RouteTraverser;

/// A node of the routing graph.
///
/// Every node, whether it decorates, fans out or talks to a destination,
/// exposes the same two modes: `route` executes a request, `traverse` walks
/// the graph shape for the same request without executing anything.
#[async_trait]
pub trait Route: Send + Sync {
    /// Descriptive name for debugging and introspection. Not structured data.
    fn route_name(&self) -> String;

    /// Execute `req` and return the reply (or error) produced downstream.
    async fn route(&self, req: &Request) -> Result<Reply>;

    /// Report each child that `req` would reach to `t`. Must not execute.
    fn traverse(&self, req: &Request, t: &RouteTraverser<'_>);
}

/// Shared handle to a node. Children may be reachable from several parents,
/// so nodes are reference counted and dropped with their graph generation.
pub type RouteHandle = Arc<dyn Route>;
