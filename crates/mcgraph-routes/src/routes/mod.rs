//! Route implementations.
//!
//! `ModifyExptimeRoute` decorates a single child; `NullRoute` and
//! `ErrorRoute` are terminal nodes.

pub mod error;
pub mod modify_exptime;
pub mod null;

pub use error::ErrorRoute;
pub use modify_exptime::{action_to_string, ExptimeAction, ModifyExptimeRoute};
pub use null::NullRoute;
