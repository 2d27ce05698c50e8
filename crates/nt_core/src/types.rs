use std::path::PathBuf;
use chrono::NaiveDate;

/// A year and an absolute link found in the speech listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub year: u16,
    pub url: String,
}

impl Candidate {
    pub fn new(year: u16, url: impl Into<String>) -> Self {
        Self { year, url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub title: String,
    /// Paragraphs separated by a blank line
    pub body: String,
}

/// The persisted form of one year's speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedRecord {
    pub year: u16,
    pub title: String,
    pub source_url: String,
    pub fetched_on: NaiveDate,
    pub body: String,
}

impl ArchivedRecord {
    pub fn new(year: u16, speech: Speech, source_url: impl Into<String>, fetched_on: NaiveDate) -> Self {
        Self {
            year,
            title: speech.title,
            source_url: source_url.into(),
            fetched_on,
            body: speech.body,
        }
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "# {}\n\nKilde: {}\nHentet: {}\n\n---\n\n{}\n",
            self.title,
            self.source_url,
            self.fetched_on.format("%Y-%m-%d"),
            self.body
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { year: u16, path: PathBuf, url: String },
    AlreadyArchived { year: u16, path: PathBuf },
}

impl RunOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            RunOutcome::Written { path, .. } | RunOutcome::AlreadyArchived { path, .. } => path,
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            RunOutcome::Written { year, .. } | RunOutcome::AlreadyArchived { year, .. } => *year,
        }
    }
}
