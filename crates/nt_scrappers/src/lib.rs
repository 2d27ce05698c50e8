pub mod http;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use http::HttpFetcher;
pub use manager::SpeechManager;
pub use scrapers::KongehusetScraper;

