use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Page structure error: {0}")]
    Structure(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Short name of the pipeline stage the error came from.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Network(_) => "http",
            Error::Structure(_) => "structure",
            Error::Extraction(_) => "extraction",
            Error::InvalidUrl(_) => "url",
            Error::Io(_) | Error::Storage(_) => "storage",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}
