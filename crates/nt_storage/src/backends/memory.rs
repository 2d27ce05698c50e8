use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use nt_core::{ArchiveStatus, ArchivedRecord, Result, SpeechArchive};
use tokio::sync::RwLock;
use crate::RECORD_EXTENSION;

/// Keeps rendered documents in memory. Same never-overwrite rule as the
/// file archive.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArchive {
    documents: Arc<RwLock<BTreeMap<u16, String>>>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the archive with an already rendered document
    pub async fn insert(&self, year: u16, document: impl Into<String>) {
        self.documents.write().await.entry(year).or_insert_with(|| document.into());
    }

    pub async fn document(&self, year: u16) -> Option<String> {
        self.documents.read().await.get(&year).cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl SpeechArchive for InMemoryArchive {
    fn path_for(&self, year: u16) -> PathBuf {
        PathBuf::from("memory").join(format!("{}.{}", year, RECORD_EXTENSION))
    }

    async fn existing(&self, year: u16) -> Result<Option<PathBuf>> {
        let documents = self.documents.read().await;
        Ok(documents.contains_key(&year).then(|| self.path_for(year)))
    }

    async fn store(&self, record: &ArchivedRecord) -> Result<(PathBuf, ArchiveStatus)> {
        let mut documents = self.documents.write().await;
        let path = self.path_for(record.year);
        if documents.contains_key(&record.year) {
            return Ok((path, ArchiveStatus::Existing));
        }
        documents.insert(record.year, record.to_markdown());
        Ok((path, ArchiveStatus::New))
    }
}
