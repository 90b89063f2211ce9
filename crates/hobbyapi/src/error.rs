//! Error taxonomy for a single challenge fetch.

/// Every way a fetch can fail. Callers handle all variants the same way:
/// render the message and carry on.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Malformed URL '{url}': {reason}")]
    UrlFormat { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn url_format(url: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::UrlFormat {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Short tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::UrlFormat { .. } => "url_format",
            ApiError::Network(_) => "network",
            ApiError::Parse(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}
