use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaypostError>;

#[derive(Error, Debug)]
pub enum WaypostError {
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Search source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("All discovery sources failed")]
    AllSourcesUnavailable,

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
