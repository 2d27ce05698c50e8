pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use models::PageFetcher;
pub use storage::{ArchiveStatus, SpeechArchive};
pub use types::{ArchivedRecord, Candidate, RunOutcome, Speech};

pub type Result<T> = std::result::Result<T, Error>;
