//! Protocol modules (requests + replies).
//!
//! Request variants are grouped by capability: `Update`, `Cas` and `Touch`
//! carry an expiration field (`HasExptime`), the rest do not. Routing nodes
//! select behavior by matching on the variant, never by peeking at fields.

pub mod reply;
pub mod request;

pub use reply::{Reply, ReplyResult};
pub use request::{
    ArithMode, ArithRequest, CasRequest, DeleteRequest, GetRequest, HasExptime, Request,
    TouchRequest, UpdateMode, UpdateRequest, EXPTIME_NEVER,
};
