use serde::Deserialize;

use mcgraph_core::error::{McError, Result};

use crate::routes::ExptimeAction;

pub const MODIFY_EXPTIME_TYPE: &str = "ModifyExptimeRoute";

/// Settings object of a modify-exptime node, as handed over by the graph
/// builder. `target` is resolved by the builder; it is accepted here so the
/// whole node object can be decoded strictly.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifyExptimeSettings {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub target: Option<serde_json::Value>,

    pub exptime: i32,

    #[serde(default)]
    pub action: ExptimeAction,
}

impl ModifyExptimeSettings {
    pub fn validate(&self) -> Result<()> {
        if let Some(kind) = &self.kind {
            if kind != MODIFY_EXPTIME_TYPE {
                return Err(McError::InvalidConfig(format!(
                    "modify-exptime: unexpected type {kind}"
                )));
            }
        }
        Ok(())
    }
}
