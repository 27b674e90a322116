use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::PATCH_OP_REPLACE;

/// One entry of a PATCH body, e.g. `{"op": "replace", "path": "/rate", "value": 199.5}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatchOperationDto {
    #[serde(default)]
    pub op: String,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub value: serde_json::Value,
}

impl PatchOperationDto {
    pub fn replace(path: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PATCH_OP_REPLACE.to_string(),
            path: path.to_string(),
            value: value.into(),
        }
    }

    pub fn is_replace(&self) -> bool {
        self.op == PATCH_OP_REPLACE
    }
}
