//! Route settings (strict decoding of already-parsed JSON).

pub mod schema;

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use mcgraph_core::error::{McError, Result};

use crate::route::{Route, RouteHandle};
use crate::routes::ModifyExptimeRoute;

pub use schema::{ModifyExptimeSettings, MODIFY_EXPTIME_TYPE};

pub fn modify_exptime_settings(v: &Value) -> Result<ModifyExptimeSettings> {
    let settings = ModifyExptimeSettings::deserialize(v)
        .map_err(|e| McError::InvalidConfig(format!("modify-exptime: {e}")))?;
    settings.validate()?;
    Ok(settings)
}

/// Build a modify-exptime node over an already built `target`.
pub fn make_modify_exptime_route(target: RouteHandle, v: &Value) -> Result<RouteHandle> {
    let built = modify_exptime_settings(v)
        .and_then(|s| ModifyExptimeRoute::new(target, s.exptime, s.action));

    match built {
        Ok(route) => {
            tracing::debug!(
                route = %route.route_name(),
                child = %route.target().route_name(),
                "route built"
            );
            Ok(Arc::new(route))
        }
        Err(e) => {
            tracing::warn!(error = %e, "modify-exptime settings rejected");
            Err(e)
        }
    }
}
