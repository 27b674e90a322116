use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message: Some(message),
            errors,
        }
    }
}
