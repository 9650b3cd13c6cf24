use std::collections::VecDeque;

use lexi_types::Word;
use uuid::Uuid;

pub const DEFAULT_RECENT_CAPACITY: usize = 10;

/// Most-recent-first list of looked up words, unique by headword
#[derive(Debug, Clone)]
pub struct RecentList {
    words: VecDeque<Word>,
    capacity: usize,
}

impl Default for RecentList {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentList {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            words: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Move `word` to the front, replacing any entry with the same headword
    pub fn push(&mut self, word: Word) {
        self.words.retain(|w| !w.same_headword(&word));
        self.words.push_front(word);
        while self.words.len() > self.capacity {
            self.words.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn to_vec(&self) -> Vec<Word> {
        self.words.iter().cloned().collect()
    }
}

/// Bookmarked words keyed by id
#[derive(Debug, Clone, Default)]
pub struct BookmarkSet {
    words: Vec<Word>,
}

impl BookmarkSet {
    pub fn contains(&self, id: &Uuid) -> bool {
        self.words.iter().any(|w| w.id == *id)
    }

    /// Remove the entry with `word.id`, or add a bookmarked copy of `word`.
    /// Returns true when the word is bookmarked afterwards.
    pub fn toggle(&mut self, word: &Word) -> bool {
        if let Some(index) = self.words.iter().position(|w| w.id == word.id) {
            self.words.remove(index);
            false
        } else {
            let mut bookmarked = word.clone();
            bookmarked.is_bookmarked = true;
            self.words.push(bookmarked);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn to_vec(&self) -> Vec<Word> {
        self.words.clone()
    }
}
