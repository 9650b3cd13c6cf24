use std::sync::{Arc, Mutex, PoisonError};

use lexi_config::Config;
use lexi_core::WordLookupService;
use lexi_dictionary::{DictionaryApiClient, DictionarySource};
use lexi_types::Word;
use tokio::sync::RwLock;

/// The numbered list `:open N` and `:bookmark N` refer to
#[derive(Debug, Clone, Default)]
pub enum ListFocus {
    /// Latest search results, read from the store on use
    #[default]
    Results,
    /// Recent searches as they were printed
    Recent(Vec<Word>),
    /// Saved words as they were printed
    Saved(Vec<Word>),
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub service: Arc<WordLookupService>,
    pub focus: Mutex<ListFocus>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = DictionaryApiClient::from_config(&config.dictionary)?;
        let metadata = client.metadata();
        tracing::info!(
            "Dictionary source: {} [{}] ({})",
            metadata.name,
            metadata.language,
            config.dictionary.api_url
        );

        Ok(Self::with_source(config, Arc::new(client)))
    }

    pub fn with_source(config: Config, source: Arc<dyn DictionarySource>) -> Self {
        let service = WordLookupService::from_config(source, &config);

        Self {
            config: Arc::new(RwLock::new(config)),
            service: Arc::new(service),
            focus: Mutex::new(ListFocus::default()),
        }
    }

    pub fn set_focus(&self, focus: ListFocus) {
        *self.focus.lock().unwrap_or_else(PoisonError::into_inner) = focus;
    }

    /// Word at `index` in the list in focus
    pub fn focused_word(&self, index: usize) -> Option<Word> {
        let focus = self.focus.lock().unwrap_or_else(PoisonError::into_inner);
        match &*focus {
            ListFocus::Results => self.service.store().results().get(index).cloned(),
            ListFocus::Recent(words) | ListFocus::Saved(words) => words.get(index).cloned(),
        }
    }
}
