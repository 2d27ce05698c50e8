use lazy_static::lazy_static;
use regex::Regex;
use scraper::ElementRef;
use url::Url;
use crate::scrapers::utils::element_text;
use super::KongehusetScraper;

lazy_static! {
    static ref SPEECH_PATH: Regex = Regex::new(
        r"(?i)^(?:https?://(?:www\.)?kongehuset\.dk)?/nyheder/[^?#]*nyt(?:aa|å|%c3%a5)rstale"
    )
    .unwrap();
}

/// Case-insensitive, but "nytarstale" without the å does not count.
const KEYWORD: &str = "nytårstale";

/// Ways of picking the speech link out of a listing item, tried in `ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStrategy {
    /// href looks like a speech article, `/nyheder/...nytaarstale...`
    SpeechPath,
    /// link text or title mentions "nytårstale"
    Keyword,
    /// any link that stays on the site
    FirstInternal,
}

impl LinkStrategy {
    pub const ORDER: [LinkStrategy; 3] = [
        LinkStrategy::SpeechPath,
        LinkStrategy::Keyword,
        LinkStrategy::FirstInternal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LinkStrategy::SpeechPath => "speech-path",
            LinkStrategy::Keyword => "keyword",
            LinkStrategy::FirstInternal => "first-internal",
        }
    }

    pub fn matches(&self, link: &ElementRef) -> bool {
        let href = href_of(link);
        match self {
            LinkStrategy::SpeechPath => SPEECH_PATH.is_match(href),
            LinkStrategy::Keyword => {
                let title = link.value().attr("title").unwrap_or_default();
                contains_keyword(&element_text(link)) || contains_keyword(title)
            }
            LinkStrategy::FirstInternal => is_internal(href),
        }
    }
}

/// Applies the strategies in order; the first one matching any link wins.
pub fn choose_link<'a>(links: &[ElementRef<'a>]) -> Option<(LinkStrategy, ElementRef<'a>)> {
    let usable: Vec<ElementRef<'a>> = links
        .iter()
        .copied()
        .filter(|link| is_navigable(href_of(link)))
        .collect();

    LinkStrategy::ORDER.iter().find_map(|strategy| {
        usable
            .iter()
            .find(|link| strategy.matches(link))
            .map(|link| (*strategy, *link))
    })
}

pub(crate) fn href_of<'a>(link: &ElementRef<'a>) -> &'a str {
    link.value().attr("href").map(str::trim).unwrap_or_default()
}

fn contains_keyword(text: &str) -> bool {
    text.to_lowercase().contains(KEYWORD)
}

fn is_navigable(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    !href.is_empty()
        && !href.starts_with('#')
        && !lower.starts_with("javascript:")
        && !lower.starts_with("mailto:")
        && !lower.starts_with("tel:")
}

/// Site-relative paths, or absolute links on the site's own host
fn is_internal(href: &str) -> bool {
    if href.starts_with('/') {
        return !href.starts_with("//");
    }
    let site_host = Url::parse(KongehusetScraper::BASE_URL)
        .ok()
        .and_then(|base| base.host_str().map(str::to_string));
    match (Url::parse(href), site_host) {
        (Ok(url), Some(host)) => {
            let link_host = url.host_str().unwrap_or_default();
            link_host == host || format!("www.{}", link_host) == host
        }
        _ => false,
    }
}
