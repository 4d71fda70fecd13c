use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Corpus I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
