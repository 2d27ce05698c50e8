use lazy_static::lazy_static;
use nt_core::{Candidate, Error, Result};
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;
use crate::scrapers::utils::{element_text, parse_selector};
use super::links::{choose_link, href_of};
use super::resolve::absolutize;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
}

const SECTION_SELECTOR: &str = "div.accordion";
const ITEM_SELECTOR: &str = "li";
const CONTENT_LINK_SELECTOR: &str = ".accordion__container__item__content a[href]";
const LINK_SELECTOR: &str = "a[href]";

/// One entry of the listing: the element holding it and the links inside.
#[derive(Debug, Clone)]
pub struct Item<'a> {
    pub element: ElementRef<'a>,
    pub links: Vec<ElementRef<'a>>,
}

/// The monarch's accordion. The page has one accordion per royal and nothing
/// but position tells them apart, so this takes the first one.
pub fn first_section(document: &Html) -> Result<ElementRef<'_>> {
    let selector = parse_selector(SECTION_SELECTOR)?;
    document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::Structure("no accordion section found on the index page".to_string()))
}

/// The `li` elements of the section. A link belongs to its closest `li`, so
/// nested lists never yield the same link twice.
pub fn list_items<'a>(section: ElementRef<'a>) -> Result<Vec<Item<'a>>> {
    let item_selector = parse_selector(ITEM_SELECTOR)?;
    let link_selector = parse_selector(LINK_SELECTOR)?;

    Ok(section
        .select(&item_selector)
        .map(|element| Item {
            element,
            links: element
                .select(&link_selector)
                .filter(|link| closest_list_item(link) == Some(element))
                .collect(),
        })
        .collect())
}

fn closest_list_item<'a>(link: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    link.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == ITEM_SELECTOR)
}

/// Every link in the accordion content, each one an item of its own.
pub fn content_link_items<'a>(section: ElementRef<'a>) -> Result<Vec<Item<'a>>> {
    let content_links = parse_selector(CONTENT_LINK_SELECTOR)?;
    Ok(section
        .select(&content_links)
        .map(|link| Item {
            element: link,
            links: vec![link],
        })
        .collect())
}

pub fn year_in(text: &str) -> Option<u16> {
    YEAR.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Looks for a year in the link text, then the title attribute, then the href.
pub fn extract_year(link: &ElementRef) -> Option<u16> {
    let text = element_text(link);
    let title = link.value().attr("title").unwrap_or_default();
    let href = href_of(link);

    // bound so the array iterator is dropped before `text`
    let year = [text.as_str(), title, href].into_iter().find_map(year_in);
    year
}

fn candidate_from_item(item: &Item) -> Option<Candidate> {
    let Some((strategy, link)) = choose_link(&item.links) else {
        debug!("Skipping item without usable link: {:?}", element_text(&item.element));
        return None;
    };

    let year = extract_year(&link).or_else(|| year_in(&element_text(&item.element)));
    let Some(year) = year else {
        debug!("Skipping link without a year: {}", href_of(&link));
        return None;
    };

    match absolutize(href_of(&link)) {
        Ok(url) => {
            debug!("🔗 {} -> {} (via {})", year, url, strategy.name());
            Some(Candidate::new(year, url))
        }
        Err(e) => {
            debug!("Skipping unresolvable link: {}", e);
            None
        }
    }
}

/// Every candidate found in the first accordion, in document order. List
/// items are tried first, then the bare content links.
pub fn locate_candidates(index_html: &str) -> Result<Vec<Candidate>> {
    let document = Html::parse_document(index_html);
    let section = first_section(&document)?;

    let mut candidates: Vec<Candidate> = list_items(section)?
        .iter()
        .filter_map(candidate_from_item)
        .collect();
    if candidates.is_empty() {
        debug!("No candidates in list items, scanning content links");
        candidates = content_link_items(section)?
            .iter()
            .filter_map(candidate_from_item)
            .collect();
    }

    if candidates.is_empty() {
        return Err(Error::Structure(
            "no candidates found in the first accordion section".to_string(),
        ));
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    const TWO_SECTIONS: &str = r#"
        <html><body>
          <div class="accordion">
            <div class="accordion__container__item">
              <h3>H.M. Kongens nytårstaler</h3>
              <div class="accordion__container__item__content">
                <p><a href="/nyheder/hm-kongens-nytaarstale-2024/">Nytårstalen 2024</a></p>
                <p><a href="/nyheder/hm-kongens-nytaarstale-2025/">Nytårstalen 2025</a></p>
              </div>
            </div>
          </div>
          <div class="accordion">
            <div class="accordion__container__item">
              <h3>H.M. Dronning Margrethes nytårstaler</h3>
              <div class="accordion__container__item__content">
                <p><a href="/nyheder/hm-dronningens-nytaarstale-2099/">Nytårstalen 2099</a></p>
              </div>
            </div>
          </div>
        </body></html>"#;

    #[test]
    fn test_only_first_section_is_used() {
        let candidates = locate_candidates(TWO_SECTIONS).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(2024, "https://www.kongehuset.dk/nyheder/hm-kongens-nytaarstale-2024/"),
                Candidate::new(2025, "https://www.kongehuset.dk/nyheder/hm-kongens-nytaarstale-2025/"),
            ]
        );
        assert!(candidates.iter().all(|c| c.year != 2099));
    }

    #[test]
    fn test_first_section_ignores_class_semantics() {
        let html = r#"
            <div class="accordion accordion--other"><ul><li><a href="/a-2001/">2001</a></li></ul></div>
            <div class="accordion accordion--king"><ul><li><a href="/b-2002/">2002</a></li></ul></div>"#;
        let candidates = locate_candidates(html).unwrap();
        assert_eq!(candidates, vec![Candidate::new(2001, "https://www.kongehuset.dk/a-2001/")]);
    }

    #[test]
    fn test_missing_section_is_structure_error() {
        let err = locate_candidates("<html><body><p>Ingen taler</p></body></html>").unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn test_section_without_candidates_is_structure_error() {
        let html = r#"
            <div class="accordion">
              <div class="accordion__container__item__content">
                <p><a href="/nyheder/arkiv/">Arkiv</a></p>
              </div>
            </div>
            <div class="accordion">
              <div class="accordion__container__item__content">
                <p><a href="/nyheder/nytaarstale-2025/">Nytårstalen 2025</a></p>
              </div>
            </div>"#;
        let err = locate_candidates(html).unwrap_err();
        assert!(matches!(err, Error::Structure(msg) if msg.contains("no candidates")));
    }

    #[test]
    fn test_list_items_use_link_strategies() {
        let html = r#"
            <div class="accordion">
              <ul>
                <li>
                  <a href="https://www.dr.dk/nytaar-2025">DR</a>
                  <a href="/video/1/" title="Nytårstale">Se talen</a>
                  <span>2025</span>
                </li>
                <li>
                  <a href="/om/">Om</a>
                  <a href="/nyheder/nytaarstale-2024/">Læs</a>
                </li>
                <li><a href="/om/">Ingen årstal her</a></li>
              </ul>
            </div>"#;
        let candidates = locate_candidates(html).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(2025, "https://www.kongehuset.dk/video/1/"),
                Candidate::new(2024, "https://www.kongehuset.dk/nyheder/nytaarstale-2024/"),
            ]
        );
    }

    #[test]
    fn test_extract_year_search_order() {
        let html = r#"
            <a id="text" href="/x-1999/" title="2000">Talen 2001</a>
            <a id="title" href="/x-1999/" title="Tale 2000">Talen</a>
            <a id="href" href="/nyheder/nytaarstale-1999/">Talen</a>
            <a id="none" href="/nyheder/tale/">Talen 1899 og 2100</a>"#;
        let document = Html::parse_fragment(html);
        let year_of = |id: &str| {
            let selector = Selector::parse(&format!("a#{}", id)).unwrap();
            extract_year(&document.select(&selector).next().unwrap())
        };

        assert_eq!(year_of("text"), Some(2001));
        assert_eq!(year_of("title"), Some(2000));
        assert_eq!(year_of("href"), Some(1999));
        assert_eq!(year_of("none"), None);
    }

    #[test]
    fn test_year_in_requires_word_boundaries() {
        assert_eq!(year_in("Nytårstalen 2025"), Some(2025));
        assert_eq!(year_in("id-20251"), None);
        assert_eq!(year_in("tale-1987/"), Some(1987));
        assert_eq!(year_in("no year"), None);
    }

    #[test]
    fn test_list_without_candidates_falls_back_to_content_links() {
        let html = r#"
            <div class="accordion">
              <ul class="breadcrumb">
                <li><a href="/">Forside</a></li>
                <li><a href="/monarkiet-i-danmark/">Monarkiet</a></li>
              </ul>
              <div class="accordion__container__item__content">
                <p><a href="/nyheder/nytaarstale-2024/">Nytårstalen 2024</a></p>
                <p><a href="/nyheder/nytaarstale-2025/">Nytårstalen 2025</a></p>
              </div>
            </div>"#;
        let candidates = locate_candidates(html).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(2024, "https://www.kongehuset.dk/nyheder/nytaarstale-2024/"),
                Candidate::new(2025, "https://www.kongehuset.dk/nyheder/nytaarstale-2025/"),
            ]
        );
    }

    #[test]
    fn test_nested_lists_yield_each_link_once() {
        let html = r#"
            <div class="accordion">
              <ul>
                <li>
                  <a href="/nyheder/nytaarstale-2024/">Nytårstalen 2024</a>
                  <ul>
                    <li><a href="/nyheder/nytaarstale-2025/">Nytårstalen 2025</a></li>
                  </ul>
                </li>
              </ul>
            </div>"#;
        let candidates = locate_candidates(html).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(2024, "https://www.kongehuset.dk/nyheder/nytaarstale-2024/"),
                Candidate::new(2025, "https://www.kongehuset.dk/nyheder/nytaarstale-2025/"),
            ]
        );
    }
}
