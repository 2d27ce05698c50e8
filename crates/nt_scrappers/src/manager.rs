use std::sync::Arc;
use chrono::Local;
use nt_core::{ArchiveStatus, ArchivedRecord, PageFetcher, Result, RunOutcome, SpeechArchive};
use crate::logging::Logger;
use crate::scrapers::KongehusetScraper;

/// Runs the whole fetch, locate, resolve, extract and archive pipeline once.
pub struct SpeechManager {
    fetcher: Arc<dyn PageFetcher>,
    archive: Arc<dyn SpeechArchive>,
    scraper: KongehusetScraper,
    logger: Logger,
}

impl SpeechManager {
    pub fn new(fetcher: Arc<dyn PageFetcher>, archive: Arc<dyn SpeechArchive>) -> Self {
        let scraper = KongehusetScraper::new();
        let logger = Logger::new().with_prefix(format!("[{}]", scraper.source().to_lowercase()));
        Self {
            fetcher,
            archive,
            scraper,
            logger,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        self.logger.info(&format!("📜 Fetching speech index {}", self.scraper.index_url()));
        let index_html = self.fetcher.fetch(self.scraper.index_url()).await?;

        let latest = self.scraper.latest_speech(&index_html)?;
        let logger = self.logger.clone().with_prefix(format!("[{}]", latest.year));
        logger.info(&format!("🔍 Latest speech: {}", latest.url));

        if let Some(path) = self.archive.existing(latest.year).await? {
            logger.info(&format!("⏭️ Already archived at {}", path.display()));
            return Ok(RunOutcome::AlreadyArchived {
                year: latest.year,
                path,
            });
        }

        let speech_html = self.fetcher.fetch(&latest.url).await?;
        let speech = self.scraper.extract_speech(&speech_html)?;
        logger.debug(&format!(
            "Extracted \"{}\" ({} characters)",
            speech.title,
            speech.body.chars().count()
        ));

        let record = ArchivedRecord::new(latest.year, speech, latest.url.clone(), Local::now().date_naive());
        let (path, status) = self.archive.store(&record).await?;

        match status {
            ArchiveStatus::New => {
                logger.info(&format!("🆕 Archived at {}", path.display()));
                Ok(RunOutcome::Written {
                    year: latest.year,
                    path,
                    url: latest.url,
                })
            }
            ArchiveStatus::Existing => {
                logger.warn(&format!("Archived by someone else meanwhile, kept {}", path.display()));
                Ok(RunOutcome::AlreadyArchived {
                    year: latest.year,
                    path,
                })
            }
        }
    }
}
