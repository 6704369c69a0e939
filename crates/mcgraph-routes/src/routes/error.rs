use async_trait::async_trait;

use mcgraph_core::error::{McError, Result};
use mcgraph_core::protocol::{Reply, Request};

use crate::route::{Route, RouteTraverser};

/// Terminal route that fails every request with a local error.
#[derive(Debug, Clone, Default)]
pub struct ErrorRoute {
    msg: String,
}

impl ErrorRoute {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[async_trait]
impl Route for ErrorRoute {
    fn route_name(&self) -> String {
        if self.msg.is_empty() {
            "error".into()
        } else {
            format!("error|{}", self.msg)
        }
    }

    async fn route(&self, req: &Request) -> Result<Reply> {
        tracing::debug!(op = req.op_name(), msg = %self.msg, "error route hit");
        Err(McError::Local(self.msg.clone()))
    }

    fn traverse(&self, _req: &Request, _t: &RouteTraverser<'_>) {}
}
