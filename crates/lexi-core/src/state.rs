use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::Word;

use crate::collections::{BookmarkSet, RecentList};

/// Events buffered per subscriber before further ones are skipped
pub const SUBSCRIBER_CAPACITY: usize = 256;

/// Change notification sent to every subscriber
#[derive(Debug, Clone)]
pub enum StoreEvent {
    Loading(bool),
    RecentChanged(Vec<Word>),
    BookmarksChanged(Vec<Word>),
    ResultsChanged { generation: u64, words: Vec<Word> },
    /// Displayed results dropped because the query became too short
    ResultsCleared { generation: u64 },
}

/// Point-in-time copy of the observable state
#[derive(Debug, Clone, Default)]
pub struct WordSnapshot {
    pub recent_words: Vec<Word>,
    pub bookmarked_words: Vec<Word>,
    /// Results of the latest search that finished while still current
    pub results: Vec<Word>,
    pub is_loading: bool,
}

struct WordState {
    recent: RecentList,
    bookmarks: BookmarkSet,
    results: Vec<Word>,
    is_loading: bool,
    /// Generation of the most recently issued search
    issued: u64,
    observers: Vec<AsyncSender<StoreEvent>>,
}

impl WordState {
    fn notify(&mut self, event: StoreEvent) {
        // A full subscriber misses this event but stays; a closed one is dropped
        self.observers.retain(|tx| tx.try_send(event.clone()).is_ok());
    }

    fn set_loading(&mut self, loading: bool) {
        if self.is_loading != loading {
            self.is_loading = loading;
            self.notify(StoreEvent::Loading(loading));
        }
    }
}

/// Shared state behind a single mutex.
///
/// The lock is only taken for short synchronous sections and never across an
/// `.await`, so cloning the store into concurrent search tasks is fine.
#[derive(Clone)]
pub struct WordStore {
    inner: Arc<Mutex<WordState>>,
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new(RecentList::default())
    }
}

impl WordStore {
    pub fn new(recent: RecentList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WordState {
                recent,
                bookmarks: BookmarkSet::default(),
                results: Vec::new(),
                is_loading: false,
                issued: 0,
                observers: Vec::new(),
            })),
        }
    }

    pub fn with_recent_capacity(capacity: usize) -> Self {
        Self::new(RecentList::with_capacity(capacity))
    }

    fn lock(&self) -> MutexGuard<'_, WordState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Receive state changes from now on.
    ///
    /// Each subscriber buffers up to [`SUBSCRIBER_CAPACITY`] events. A
    /// subscriber that falls that far behind misses the overflow and should
    /// re-read [`WordStore::snapshot`].
    pub fn subscribe(&self) -> AsyncReceiver<StoreEvent> {
        let (tx, rx) = kanal::bounded_async(SUBSCRIBER_CAPACITY);
        self.lock().observers.push(tx);
        rx
    }

    pub fn snapshot(&self) -> WordSnapshot {
        let state = self.lock();
        WordSnapshot {
            recent_words: state.recent.to_vec(),
            bookmarked_words: state.bookmarks.to_vec(),
            results: state.results.clone(),
            is_loading: state.is_loading,
        }
    }

    pub fn recent_words(&self) -> Vec<Word> {
        self.lock().recent.to_vec()
    }

    pub fn bookmarked_words(&self) -> Vec<Word> {
        self.lock().bookmarks.to_vec()
    }

    pub fn results(&self) -> Vec<Word> {
        self.lock().results.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn latest_generation(&self) -> u64 {
        self.lock().issued
    }

    pub fn add_to_recent(&self, word: Word) {
        let mut state = self.lock();
        state.recent.push(word);
        let recent = state.recent.to_vec();
        state.notify(StoreEvent::RecentChanged(recent));
    }

    /// Returns true when the word is bookmarked afterwards
    pub fn toggle_bookmark(&self, word: &Word) -> bool {
        let mut state = self.lock();
        let bookmarked = state.bookmarks.toggle(word);
        let bookmarks = state.bookmarks.to_vec();
        state.notify(StoreEvent::BookmarksChanged(bookmarks));
        bookmarked
    }

    pub fn is_bookmarked(&self, word: &Word) -> bool {
        self.lock().bookmarks.contains(&word.id)
    }

    /// Start a search: issue a new generation and raise the loading flag.
    /// The flag drops again when the ticket is dropped.
    pub fn begin_search(&self) -> SearchTicket {
        let mut state = self.lock();
        state.issued += 1;
        let generation = state.issued;
        state.set_loading(true);

        SearchTicket {
            store: self.clone(),
            generation,
        }
    }

    /// Invalidate in-flight searches without starting a new one and clear
    /// the displayed results
    pub fn supersede(&self) -> u64 {
        let mut state = self.lock();
        state.issued += 1;
        let generation = state.issued;
        if !state.results.is_empty() {
            state.results.clear();
            state.notify(StoreEvent::ResultsCleared { generation });
        }
        generation
    }
}

/// Loading guard and generation token for one in-flight search
pub struct SearchTicket {
    store: WordStore,
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Publish `words` as the displayed results unless a newer search was
    /// issued meanwhile. Returns whether they were applied.
    pub fn complete(&self, words: &[Word]) -> bool {
        let mut state = self.store.lock();
        if state.issued != self.generation {
            return false;
        }

        state.results = words.to_vec();
        state.notify(StoreEvent::ResultsChanged {
            generation: self.generation,
            words: words.to_vec(),
        });
        true
    }
}

impl Drop for SearchTicket {
    fn drop(&mut self) {
        self.store.lock().set_loading(false);
    }
}
