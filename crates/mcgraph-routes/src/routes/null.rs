use async_trait::async_trait;

use mcgraph_core::error::Result;
use mcgraph_core::protocol::{Reply, Request};

use crate::route::{Route, RouteTraverser};

/// Terminal route that holds nothing: every request gets the miss reply for
/// its operation. Useful as a blackhole target and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRoute;

#[async_trait]
impl Route for NullRoute {
    fn route_name(&self) -> String {
        "null".into()
    }

    async fn route(&self, req: &Request) -> Result<Reply> {
        Ok(Reply::miss_for(req))
    }

    fn traverse(&self, _req: &Request, _t: &RouteTraverser<'_>) {}
}
