use thiserror::Error;

/// Failures of the remote book search. All of them degrade to an empty
/// result set at the UI boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("search endpoint answered {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("could not decode search response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored value under `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReviewError {
    /// Shown verbatim in the blocking alert.
    #[error("Por favor, selecione uma nota (estrelas).")]
    MissingRating,
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
    #[error("item `{0}` not found")]
    ItemNotFound(String),
    #[error("user `{0}` not found")]
    AuthorNotFound(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FollowError {
    #[error("users cannot follow themselves")]
    SelfFollow,
    #[error("user `{0}` not found")]
    UnknownUser(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
