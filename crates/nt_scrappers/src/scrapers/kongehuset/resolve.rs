use nt_core::{Candidate, Error, Result};
use url::Url;
use super::KongehusetScraper;

/// Turn an href from the listing into an absolute URL.
///
/// Absolute links are returned as-is and root-relative ones are appended to
/// the site origin without any re-encoding. Anything else is joined against
/// the index page.
pub fn absolutize(href: &str) -> Result<String> {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Ok(href.to_string());
    }
    if href.starts_with("//") {
        return Ok(format!("https:{}", href));
    }
    if href.starts_with('/') {
        return Ok(format!("{}{}", KongehusetScraper::BASE_URL, href));
    }

    let base = Url::parse(KongehusetScraper::INDEX_URL)
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", KongehusetScraper::INDEX_URL, e)))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", href, e)))
}

/// Highest year wins; among equal years the first one listed.
pub fn select_latest(candidates: &[Candidate]) -> Result<&Candidate> {
    candidates
        .iter()
        .fold(None, |best: Option<&Candidate>, candidate| match best {
            Some(best) if best.year >= candidate.year => Some(best),
            _ => Some(candidate),
        })
        .ok_or_else(|| Error::Structure("no candidates to choose from".to_string()))
}
