//! Non-executing graph walks.
//!
//! A node's `traverse` hands every child a request would reach to
//! [`RouteTraverser::visit`], which notifies the callbacks and recurses into
//! the child. Nothing is routed, so tools can inspect a live graph
//! (validation, discovery, dry runs) without touching any destination.

use std::cell::RefCell;

use mcgraph_core::protocol::Request;

use super::handle::Route;

type Callback<'a> = Box<dyn Fn(&dyn Route, &Request) + 'a>;

/// Depth-first visitor over the routing graph.
#[derive(Default)]
pub struct RouteTraverser<'a> {
    start: Option<Callback<'a>>,
    end: Option<Callback<'a>>,
}

impl<'a> RouteTraverser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on entering a child, before its own children.
    pub fn on_start(mut self, f: impl Fn(&dyn Route, &Request) + 'a) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// Called on leaving a child, after its own children.
    pub fn on_end(mut self, f: impl Fn(&dyn Route, &Request) + 'a) -> Self {
        self.end = Some(Box::new(f));
        self
    }

    /// Visit `child` with the request as its parent would pass it.
    pub fn visit(&self, child: &dyn Route, req: &Request) {
        if let Some(start) = &self.start {
            start(child, req);
        }
        child.traverse(req, self);
        if let Some(end) = &self.end {
            end(child, req);
        }
    }
}

/// Names of every node `req` reaches from `root`, depth first, root included.
///
/// Shared children appear once per path that reaches them.
pub fn describe(root: &dyn Route, req: &Request) -> Vec<String> {
    let names = RefCell::new(vec![root.route_name()]);
    let t = RouteTraverser::new().on_start(|rh, _| names.borrow_mut().push(rh.route_name()));
    root.traverse(req, &t);
    drop(t);
    names.into_inner()
}
