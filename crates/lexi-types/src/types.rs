use crate::Word;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Raw text typed into the search field
    TextInput(String),
    ShowResults(Vec<DisplayResult>),
    /// Shown instead of results ("No results found", ...)
    ShowMessage(String),
    ShowDetail(DisplayResult),
    ShowRecent(Vec<DisplayResult>),
    ShowBookmarks(Vec<DisplayResult>),
    LoadingChanged(bool),
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SelectResult(usize),
    ToggleBookmark(usize),
    ListRecent,
    ListBookmarks,
    Close,
}

/// Renderable view of a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub term: String,
    pub definition: String,
    pub language: String,
    pub bookmarked: bool,
}

impl From<&Word> for DisplayResult {
    fn from(word: &Word) -> Self {
        Self {
            term: word.original.clone(),
            definition: word.translation.clone(),
            language: word.language.clone(),
            bookmarked: word.is_bookmarked,
        }
    }
}
