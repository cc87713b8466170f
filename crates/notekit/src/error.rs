use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotekitError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Header error: {0}")]
    Header(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Error processing file {from}: {message}")]
    Rename {
        from: String,
        to: String,
        message: String,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotekitError>;
