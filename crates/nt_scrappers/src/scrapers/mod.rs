pub mod kongehuset;

pub use kongehuset::KongehusetScraper;

/// Common utilities for scrapers
pub(crate) mod utils {
    use nt_core::{Error, Result};
    use scraper::{ElementRef, Html, Selector};

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Structure(format!("Invalid selector {:?}: {}", selector, e)))
    }

    /// Visible text of an element with all whitespace runs, including the
    /// gaps between text nodes, collapsed to a single space.
    pub fn element_text(element: &ElementRef) -> String {
        element
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text of the first element matching `selector`, if any
    pub fn first_text(document: &Html, selector: &str) -> Result<Option<String>> {
        let selector = parse_selector(selector)?;
        Ok(document.select(&selector).next().map(|el| element_text(&el)))
    }
}
