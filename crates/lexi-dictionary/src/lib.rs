mod client;
mod entry;
mod normalize;

pub use client::DictionaryApiClient;
pub use entry::{Definition, DictionaryEntry, Meaning};
pub use normalize::normalize_entries;

use lexi_types::Word;

/// Remote dictionary the lookup service talks to
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Look up a headword. "Not found" is an empty result, not an error.
    async fn lookup(&self, query: &str) -> Result<Vec<Word>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub language: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),
}
