use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearxngError>;

#[derive(Debug, Error)]
pub enum SearxngError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearxngError {
    fn from(err: reqwest::Error) -> Self {
        // Body-decode failures surface through reqwest's own error type
        if err.is_decode() {
            SearxngError::Parse(err.to_string())
        } else {
            SearxngError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearxngError {
    fn from(err: serde_json::Error) -> Self {
        SearxngError::Parse(err.to_string())
    }
}
