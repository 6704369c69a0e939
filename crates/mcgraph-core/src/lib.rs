//! mcgraph core: transport-agnostic request/reply model and error types.
//!
//! This crate defines the request variants, replies and error surface shared
//! by every node of the routing graph. It carries no runtime or transport
//! dependencies so it can be reused by route implementations, tooling and
//! tests alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `McError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{McError, Result, ResultCode};
pub use protocol::{Reply, ReplyResult, Request};
