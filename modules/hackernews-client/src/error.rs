use thiserror::Error;

pub type Result<T> = std::result::Result<T, HackerNewsError>;

#[derive(Debug, Error)]
pub enum HackerNewsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for HackerNewsError {
    fn from(err: reqwest::Error) -> Self {
        // Body-decode failures surface through reqwest's own error type
        if err.is_decode() {
            HackerNewsError::Parse(err.to_string())
        } else {
            HackerNewsError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HackerNewsError {
    fn from(err: serde_json::Error) -> Self {
        HackerNewsError::Parse(err.to_string())
    }
}
