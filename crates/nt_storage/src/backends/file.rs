use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use nt_core::{ArchiveStatus, ArchivedRecord, Error, Result, SpeechArchive};
use tracing::debug;
use crate::RECORD_EXTENSION;

/// Markdown documents in a flat directory, one `<year>.md` per speech.
#[derive(Debug, Clone)]
pub struct FileArchive {
    dir: PathBuf,
}

impl FileArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `contents` to `path` in one step, failing if `path` exists.
    /// The document is staged in a temp file in `dir` so readers never
    /// observe a partial file. Blocking; run it off the async executor.
    fn write_new(dir: &Path, path: &Path, contents: &str) -> std::io::Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix(".nytaarstale-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist_noclobber(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl SpeechArchive for FileArchive {
    fn path_for(&self, year: u16) -> PathBuf {
        self.dir.join(format!("{}.{}", year, RECORD_EXTENSION))
    }

    async fn existing(&self, year: u16) -> Result<Option<PathBuf>> {
        let path = self.path_for(year);
        if tokio::fs::try_exists(&path).await? {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    async fn store(&self, record: &ArchivedRecord) -> Result<(PathBuf, ArchiveStatus)> {
        if let Some(path) = self.existing(record.year).await? {
            debug!("📁 {} already archived, leaving it untouched", path.display());
            return Ok((path, ArchiveStatus::Existing));
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(record.year);
        let dir = self.dir.clone();
        let target = path.clone();
        let contents = record.to_markdown();
        let written = tokio::task::spawn_blocking(move || Self::write_new(&dir, &target, &contents))
            .await
            .map_err(|e| Error::Storage(format!("archive writer task failed: {}", e)))?;

        match written {
            Ok(()) => {
                debug!("💾 Wrote {}", path.display());
                Ok((path, ArchiveStatus::New))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok((path, ArchiveStatus::Existing)),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
