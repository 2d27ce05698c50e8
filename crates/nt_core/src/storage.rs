use std::path::PathBuf;
use async_trait::async_trait;
use crate::types::ArchivedRecord;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStatus {
    New,
    Existing,
}

/// A store of speeches keyed by year. Existing keys are never overwritten.
#[async_trait]
pub trait SpeechArchive: Send + Sync {
    /// Where the record for `year` lives, whether or not it exists yet
    fn path_for(&self, year: u16) -> PathBuf;

    /// Returns the location of the record for `year` if one is archived
    async fn existing(&self, year: u16) -> Result<Option<PathBuf>>;

    /// Writes `record` unless its year is already archived
    async fn store(&self, record: &ArchivedRecord) -> Result<(PathBuf, ArchiveStatus)>;
}
