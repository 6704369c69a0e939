//! Shared helpers for route integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use mcgraph_core::error::{McError, Result};
use mcgraph_core::protocol::{Reply, ReplyResult, Request};
use mcgraph_routes::{Route, RouteTraverser};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Terminal route that records what it receives.
pub struct RecordingRoute {
    name: String,
    reply: std::result::Result<Reply, McError>,
    seen: Mutex<Vec<(usize, Request)>>,
    traversed: AtomicUsize,
}

impl RecordingRoute {
    pub fn new(name: &str) -> Self {
        Self::replying(name, Ok(Reply::new(ReplyResult::Stored)))
    }

    pub fn replying(name: &str, reply: std::result::Result<Reply, McError>) -> Self {
        Self {
            name: name.into(),
            reply,
            seen: Mutex::new(Vec::new()),
            traversed: AtomicUsize::new(0),
        }
    }

    /// Requests routed so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    /// Address of each routed request, to tell forwarded originals from copies.
    pub fn addresses(&self) -> Vec<usize> {
        self.seen.lock().unwrap().iter().map(|(a, _)| *a).collect()
    }

    pub fn route_calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn traverse_calls(&self) -> usize {
        self.traversed.load(Ordering::SeqCst)
    }
}

pub fn addr_of(req: &Request) -> usize {
    req as *const Request as usize
}

#[async_trait]
impl Route for RecordingRoute {
    fn route_name(&self) -> String {
        format!("recording|{}", self.name)
    }

    async fn route(&self, req: &Request) -> Result<Reply> {
        self.seen.lock().unwrap().push((addr_of(req), req.clone()));
        self.reply.clone()
    }

    fn traverse(&self, _req: &Request, _t: &RouteTraverser<'_>) {
        self.traversed.fetch_add(1, Ordering::SeqCst);
    }
}
