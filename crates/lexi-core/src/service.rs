use std::sync::Arc;

use kanal::AsyncReceiver;
use lexi_config::Config;
use lexi_dictionary::{DictionarySource, LookupError};
use lexi_types::Word;

use crate::state::{StoreEvent, WordStore};

pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Search, recent-history and bookmark operations for the UI layer
pub struct WordLookupService {
    source: Arc<dyn DictionarySource>,
    store: WordStore,
    min_query_chars: usize,
}

impl WordLookupService {
    pub fn new(source: Arc<dyn DictionarySource>, store: WordStore) -> Self {
        Self {
            source,
            store,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }

    pub fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    pub fn from_config(source: Arc<dyn DictionarySource>, config: &Config) -> Self {
        let store = WordStore::with_recent_capacity(config.history.recent_capacity);

        if config.history.seed_samples {
            // Oldest first so the list reads in sample order
            for word in Word::sample_words().into_iter().rev() {
                store.add_to_recent(word);
            }
        }

        Self::new(source, store).with_min_query_chars(config.dictionary.min_query_chars)
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Whether `query` is long enough to hit the network
    pub fn accepts_query(&self, query: &str) -> bool {
        !query.is_empty() && query.chars().count() >= self.min_query_chars
    }

    /// Look up `query`, keeping failures distinct from "no entry".
    ///
    /// Short queries return empty without touching the loading flag. The
    /// results are also published to the store unless a newer search was
    /// issued before this one finished.
    pub async fn lookup(&self, query: &str) -> Result<Vec<Word>, LookupError> {
        if !self.accepts_query(query) {
            self.store.supersede();
            return Ok(Vec::new());
        }

        let ticket = self.store.begin_search();
        tracing::debug!("search #{} '{}'", ticket.generation(), query);

        let result = self.source.lookup(query).await;

        let published = match &result {
            Ok(words) => ticket.complete(words),
            Err(_) => ticket.complete(&[]),
        };
        if !published {
            tracing::debug!("search #{} superseded, result discarded", ticket.generation());
        }

        result
    }

    /// Look up `query`; failures are logged and reported as no results
    pub async fn search(&self, query: &str) -> Vec<Word> {
        match self.lookup(query).await {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!("Lookup for '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }

    pub fn add_to_recent(&self, word: Word) {
        self.store.add_to_recent(word);
    }

    pub fn toggle_bookmark(&self, word: &Word) {
        let bookmarked = self.store.toggle_bookmark(word);
        tracing::debug!("'{}' bookmarked: {}", word.original, bookmarked);
    }

    pub fn is_word_bookmarked(&self, word: &Word) -> bool {
        self.store.is_bookmarked(word)
    }

    pub fn recent_words(&self) -> Vec<Word> {
        self.store.recent_words()
    }

    pub fn bookmarked_words(&self) -> Vec<Word> {
        self.store.bookmarked_words()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn subscribe(&self) -> AsyncReceiver<StoreEvent> {
        self.store.subscribe()
    }
}
