use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid model value: {0}")]
    Model(#[from] curator_model::ModelError),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CuratorError>;

/// Rejections raised by the bulk edit dialog's state machine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    #[error("an update is already in flight")]
    Busy,

    #[error("the dialog has already been closed")]
    Closed,

    #[error("no update is in flight")]
    NotSubmitting,
}
