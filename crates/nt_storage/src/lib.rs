pub mod backends;

pub use backends::*;

/// Extension of archived speech documents.
pub const RECORD_EXTENSION: &str = "md";
