use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Local form validation failed; nothing was sent
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (status {status})")]
    Api { status: u16, message: Option<String> },
}

impl ClientError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(errors) => errors.join("\n"),
            ClientError::Network(_) => {
                "A network error occurred. Please check your connection to the API.".to_string()
            }
            ClientError::Api { status: 404, .. } => "Cannot find data".to_string(),
            ClientError::Api {
                status: 400,
                message,
            } => message
                .clone()
                .unwrap_or_else(|| "API Error (Bad Request)".to_string()),
            ClientError::Api { status, .. } => format!("API returned status code {}", status),
        }
    }
}
