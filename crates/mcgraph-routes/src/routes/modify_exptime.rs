//! Expiration rewriting decorator.
//!
//! Rewrites the exptime of requests that carry one, then forwards to a single
//! target:
//! - `set`: replace the exptime with the configured value;
//! - `min`: cap the exptime at the configured value. 0 means "never
//!   expires" and is treated as larger than any finite exptime.
//!
//! Requests without an exptime are forwarded untouched. The caller's request
//! is never modified: a rewrite forwards a fresh copy, and when nothing
//! changes the original is forwarded as is.

use std::borrow::Cow;

use async_trait::async_trait;
use serde::Deserialize;

use mcgraph_core::error::{McError, Result};
use mcgraph_core::protocol::{HasExptime, Reply, Request, EXPTIME_NEVER};

use crate::route::{Route, RouteHandle, RouteTraverser};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExptimeAction {
    #[default]
    Set,
    Min,
}

impl ExptimeAction {
    /// Exptime to forward given the configured and current values, or `None`
    /// when the request should go out unchanged.
    fn target_exptime(self, configured: i32, current: i32) -> Option<i32> {
        match self {
            ExptimeAction::Set => Some(configured),
            ExptimeAction::Min => {
                if current == EXPTIME_NEVER || current > configured {
                    Some(configured)
                } else {
                    None
                }
            }
        }
    }
}

pub fn action_to_string(action: ExptimeAction) -> &'static str {
    match action {
        ExptimeAction::Set => "set",
        ExptimeAction::Min => "min",
    }
}

pub struct ModifyExptimeRoute {
    target: RouteHandle,
    exptime: i32,
    action: ExptimeAction,
}

impl ModifyExptimeRoute {
    /// Fails for `min` with exptime 0 (capping at "never" is meaningless) and
    /// for any negative exptime.
    pub fn new(target: RouteHandle, exptime: i32, action: ExptimeAction) -> Result<Self> {
        if action == ExptimeAction::Min && exptime == EXPTIME_NEVER {
            return Err(McError::InvalidConfig(
                "modify-exptime: exptime can not be 0 for min action".into(),
            ));
        }
        if exptime < 0 {
            return Err(McError::InvalidConfig(format!(
                "modify-exptime: exptime must not be negative (got {exptime})"
            )));
        }
        Ok(Self {
            target,
            exptime,
            action,
        })
    }

    pub fn target(&self) -> &RouteHandle {
        &self.target
    }

    /// Rewrite a request whose type is known to carry an exptime.
    pub fn rewrite_typed<'r, R>(&self, req: &'r R) -> Cow<'r, R>
    where
        R: HasExptime + Clone,
    {
        match self.action.target_exptime(self.exptime, req.exptime()) {
            Some(exptime) => {
                let mut copy = req.clone();
                copy.set_exptime(exptime);
                Cow::Owned(copy)
            }
            None => Cow::Borrowed(req),
        }
    }

    /// The request to forward: `Borrowed` is the caller's own request,
    /// `Owned` is a rewritten copy.
    pub fn rewrite<'r>(&self, req: &'r Request) -> Cow<'r, Request> {
        match req {
            Request::Update(r) => lift(self.rewrite_typed(r), req, Request::Update),
            Request::Cas(r) => lift(self.rewrite_typed(r), req, Request::Cas),
            Request::Touch(r) => lift(self.rewrite_typed(r), req, Request::Touch),
            Request::Get(_) | Request::Delete(_) | Request::Arith(_) | Request::Version => {
                Cow::Borrowed(req)
            }
        }
    }
}

fn lift<'r, R: Clone>(
    inner: Cow<'r, R>,
    whole: &'r Request,
    wrap: fn(R) -> Request,
) -> Cow<'r, Request> {
    match inner {
        Cow::Borrowed(_) => Cow::Borrowed(whole),
        Cow::Owned(r) => Cow::Owned(wrap(r)),
    }
}

#[async_trait]
impl Route for ModifyExptimeRoute {
    fn route_name(&self) -> String {
        format!("modify-exptime|{}|exptime={}", action_to_string(self.action), self.exptime)
    }

    async fn route(&self, req: &Request) -> Result<Reply> {
        let forwarded = self.rewrite(req);
        if let Cow::Owned(rewritten) = &forwarded {
            tracing::trace!(
                route = %self.route_name(),
                op = req.op_name(),
                from = ?req.exptime(),
                to = ?rewritten.exptime(),
                "exptime rewritten"
            );
        }
        self.target.route(&forwarded).await
    }

    fn traverse(&self, req: &Request, t: &RouteTraverser<'_>) {
        t.visit(self.target.as_ref(), req);
    }
}
