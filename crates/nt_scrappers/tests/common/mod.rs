use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use nt_core::{Error, PageFetcher, Result};

pub const INDEX_URL: &str = "https://www.kongehuset.dk/monarkiet-i-danmark/nytaarstaler/";
pub const SPEECH_URL: &str = "https://www.kongehuset.dk/nyheder/hm-kongens-nytaarstale-2025/";

pub const INDEX_HTML: &str = include_str!("../fixtures/index.html");
pub const SPEECH_HTML: &str = include_str!("../fixtures/speech_2025.html");

pub const PARAGRAPHS: [&str; 3] = [
    "Godaften. Et nyt år står for døren, og jeg vil gerne begynde med at takke alle jer, der i årets løb har gjort en forskel for andre. I sygeplejen, i skolerne, i foreningerne og i de mange hjem rundt om i landet har I vist, hvad fællesskab betyder.",
    "Vi lever i en urolig tid. Krigen i Europa fortsætter, og mange mærker usikkerheden helt ind i hverdagen. Netop derfor er det vigtigt, at vi holder fast i det, der binder os sammen: tilliden til hinanden, respekten for forskellighed og viljen til at tage ansvar.",
    "Til Grønland og Færøerne sender jeg en særlig hilsen. Rigsfællesskabet er vores fælles styrke, og det skal vi værne om. Dronningen og jeg ønsker jer alle et godt og lykkebringende nytår. Gud bevare Danmark.",
];

/// Serves canned pages and records every requested URL.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    /// The index and 2025 speech fixtures
    pub fn kongehuset() -> Self {
        Self::new()
            .with_page(INDEX_URL, INDEX_HTML)
            .with_page(SPEECH_URL, SPEECH_HTML)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::InvalidUrl(format!("no fixture for {}", url)))
    }
}
