//! Replies returned by the routing graph.
//!
//! Routing nodes treat replies as opaque: they are produced by terminal nodes
//! and passed back up unchanged.

use bytes::Bytes;

use super::request::Request;

/// Outcome reported by the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyResult {
    Found,
    NotFound,
    Stored,
    NotStored,
    Ok,
}

impl ReplyResult {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyResult::Found => "found",
            ReplyResult::NotFound => "notfound",
            ReplyResult::Stored => "stored",
            ReplyResult::NotStored => "notstored",
            ReplyResult::Ok => "ok",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub result: ReplyResult,
    /// Item value for hits, counter value for arithmetic, version string.
    pub value: Option<Bytes>,
    pub flags: u64,
}

impl Reply {
    pub fn new(result: ReplyResult) -> Self {
        Self {
            result,
            value: None,
            flags: 0,
        }
    }

    pub fn found(value: impl Into<Bytes>, flags: u64) -> Self {
        Self {
            result: ReplyResult::Found,
            value: Some(value.into()),
            flags,
        }
    }

    /// Reply a destination that holds nothing would give to `req`.
    pub fn miss_for(req: &Request) -> Self {
        let result = match req {
            Request::Get(_) | Request::Touch(_) | Request::Delete(_) | Request::Arith(_) => {
                ReplyResult::NotFound
            }
            Request::Update(_) | Request::Cas(_) => ReplyResult::NotStored,
            Request::Version => ReplyResult::Ok,
        };
        Self::new(result)
    }
}
