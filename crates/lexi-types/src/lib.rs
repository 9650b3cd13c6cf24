pub mod types;
pub mod word;

pub use types::{AppEvent, DisplayResult, UiEvent};
pub use word::Word;
