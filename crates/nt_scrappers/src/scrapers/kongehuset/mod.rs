//! Scraper for the New Year speeches published on kongehuset.dk.
//!
//! The listing page groups speeches in accordions, one per royal. The
//! monarch's speeches are in the first accordion; the years only appear in
//! the links inside it (e.g. "Nytårstalen 2025").

use nt_core::{Candidate, Result, Speech};

pub mod index;
pub mod links;
pub mod resolve;
pub mod speech;

#[derive(Debug, Clone, Default)]
pub struct KongehusetScraper;

impl KongehusetScraper {
    pub fn new() -> Self {
        Self
    }

    pub const BASE_URL: &'static str = "https://www.kongehuset.dk";
    pub const INDEX_URL: &'static str = "https://www.kongehuset.dk/monarkiet-i-danmark/nytaarstaler/";

    pub fn source(&self) -> &str {
        "Kongehuset"
    }

    pub fn index_url(&self) -> &str {
        Self::INDEX_URL
    }

    /// Every (year, url) pair listed in the first accordion of the index page
    pub fn find_candidates(&self, index_html: &str) -> Result<Vec<Candidate>> {
        index::locate_candidates(index_html)
    }

    /// The most recent speech listed on the index page
    pub fn latest_speech(&self, index_html: &str) -> Result<Candidate> {
        let candidates = self.find_candidates(index_html)?;
        resolve::select_latest(&candidates).cloned()
    }

    pub fn extract_speech(&self, speech_html: &str) -> Result<Speech> {
        speech::extract_speech(speech_html)
    }
}
