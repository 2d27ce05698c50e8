use nt_core::{Error, Result, Speech};
use scraper::Html;
use crate::scrapers::utils::{element_text, first_text, parse_selector};

pub const FALLBACK_TITLE: &str = "Kongens nytårstale";

/// Anything shorter means the page layout changed, not that the speech was short.
pub const MIN_BODY_CHARS: usize = 500;

pub fn extract_speech(html: &str) -> Result<Speech> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let body = extract_body(&document)?;

    let length = body.chars().count();
    if length < MIN_BODY_CHARS {
        return Err(Error::Extraction(format!(
            "only {} characters of speech text found (expected at least {}), the page markup may have changed",
            length, MIN_BODY_CHARS
        )));
    }

    Ok(Speech { title, body })
}

fn extract_title(document: &Html) -> Result<String> {
    Ok(first_text(document, "h1")?
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string()))
}

/// Paragraphs of `<main>`, or of the whole page when there is none.
fn extract_body(document: &Html) -> Result<String> {
    let main = parse_selector("main")?;
    let paragraph = parse_selector("p")?;

    let region = document
        .select(&main)
        .next()
        .unwrap_or_else(|| document.root_element());

    Ok(region
        .select(&paragraph)
        .map(|p| element_text(&p))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"))
}
