use thiserror::Error;

/// Coarse classification of an [`AppError`].
///
/// Callers such as a route layer branch on this instead of on individual
/// variants; see [`AppError::http_status`] for the usual status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Upstream answered 404, the requested identity does not exist.
    NotFound,
    /// Upstream answered 401/403, the API key is invalid or expired.
    Forbidden,
    /// Upstream kept answering 429 until the retry budget ran out.
    RateLimited,
    /// Network failure, 5xx after retries, or an unusable response.
    Transport,
    /// Missing or invalid local configuration.
    Configuration,
    /// Local I/O or setup failure unrelated to the upstream API.
    Internal,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API rejected credentials ({status}): {url}")]
    ApiForbidden { status: u16, url: String },

    #[error("API rate limit exceeded (429) after {attempts} attempts (URL: {url})")]
    ApiRateLimit { attempts: u32, url: String },

    #[error("API server error ({status}) after {attempts} attempts (URL: {url})")]
    ApiServerError {
        status: u16,
        attempts: u32,
        url: String,
    },

    #[error("API returned unexpected status ({status}): {url}")]
    ApiUnexpectedStatus { status: u16, url: String },

    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Player lookup did not finish within {seconds} seconds")]
    PipelineTimeout { seconds: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API forbidden error (401 and 403)
    pub fn api_forbidden(status: u16, url: impl Into<String>) -> Self {
        Self::ApiForbidden {
            status,
            url: url.into(),
        }
    }

    /// Create an API rate limit error once the retry budget is spent
    pub fn api_rate_limit(attempts: u32, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            attempts,
            url: url.into(),
        }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(status: u16, attempts: u32, url: impl Into<String>) -> Self {
        Self::ApiServerError {
            status,
            attempts,
            url: url.into(),
        }
    }

    /// Create an error for a status that is neither success nor classified
    pub fn api_unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a pipeline timeout error
    pub fn pipeline_timeout(seconds: u64) -> Self {
        Self::PipelineTimeout { seconds }
    }

    /// Classifies the error into one of the coarse kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ApiNotFound { .. } => ErrorKind::NotFound,
            AppError::ApiForbidden { .. } => ErrorKind::Forbidden,
            AppError::ApiRateLimit { .. } => ErrorKind::RateLimited,
            AppError::ApiFetch(_)
            | AppError::ApiServerError { .. }
            | AppError::ApiUnexpectedStatus { .. }
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::PipelineTimeout { .. } => ErrorKind::Transport,
            AppError::Config(_) | AppError::TomlDeserialize(_) => ErrorKind::Configuration,
            AppError::Io(_)
            | AppError::TomlSerialize(_)
            | AppError::JsonSerialize(_)
            | AppError::LogSetup(_) => ErrorKind::Internal,
        }
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Status code a route layer should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Forbidden => 403,
            ErrorKind::RateLimited => 429,
            ErrorKind::Transport => 502,
            ErrorKind::Configuration | ErrorKind::Internal => 500,
        }
    }

    /// Check if error indicates the player or match does not exist
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
