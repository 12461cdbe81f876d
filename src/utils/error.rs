use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// True when the server answered with exactly `code`.
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == code)
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ClientError::ConfigError { .. }
                | ClientError::ConfigValidationError { .. }
                | ClientError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_timeout() => "The API did not answer in time".to_string(),
            ClientError::Http(e) if e.is_connect() => "Could not connect to the API".to_string(),
            ClientError::Http(_) => "The request to the API failed".to_string(),
            ClientError::Status { status: 401, .. } => "Authentication required".to_string(),
            ClientError::Status { status: 403, .. } => "Access denied".to_string(),
            ClientError::Status { status: 404, .. } => "Not found".to_string(),
            ClientError::Status { status, body } if body.is_empty() => {
                format!("The API returned status {}", status)
            }
            ClientError::Status { status, body } => {
                format!("The API returned status {}: {}", status, body)
            }
            ClientError::Serialization(e) => format!("Unexpected response shape: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "Check the base URL and that the API is reachable",
            ClientError::Status { status: 401, .. } | ClientError::Status { status: 403, .. } => {
                "Provide a valid token with --token or in the [api] section of the config file"
            }
            ClientError::Status { .. } => "Check the identifiers and parameters you passed",
            ClientError::Serialization(_) => "Client and server schema versions may differ",
            ClientError::Io(_) => "Check that the file exists and is readable",
            _ => "Fix the configuration and run again",
        }
    }
}
