use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One dictionary result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Stable handle for selection and bookmarking, not a dedup key
    pub id: Uuid,
    /// Headword
    pub original: String,
    /// Definition or gloss
    pub translation: String,
    pub language: String,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl Word {
    pub fn new(
        original: impl Into<String>,
        translation: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original: original.into(),
            translation: translation.into(),
            language: language.into(),
            is_bookmarked: false,
        }
    }

    /// Lowercased headword used for case-insensitive identity
    pub fn headword_key(&self) -> String {
        self.original.to_lowercase()
    }

    /// Two words are the same logical word when their headwords match ignoring case
    pub fn same_headword(&self, other: &Word) -> bool {
        self.headword_key() == other.headword_key()
    }

    /// Seed data used before any lookup has happened
    pub fn sample_words() -> Vec<Word> {
        [
            ("Hello", "Hola"),
            ("World", "Mundo"),
            ("Good morning", "Buenos días"),
            ("Thank you", "Gracias"),
            ("Please", "Por favor"),
            ("Goodbye", "Adiós"),
            ("Friend", "Amigo"),
            ("Water", "Agua"),
            ("Food", "Comida"),
            ("Time", "Tiempo"),
        ]
        .into_iter()
        .map(|(original, translation)| Word::new(original, translation, "Spanish"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_is_not_bookmarked() {
        let word = Word::new("cat", "a small feline", "English");
        assert!(!word.is_bookmarked);
        assert_eq!(word.original, "cat");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Word::new("cat", "a small feline", "English");
        let b = Word::new("cat", "a small feline", "English");
        assert_ne!(a.id, b.id);
        assert!(a.same_headword(&b));
    }

    #[test]
    fn test_same_headword_ignores_case() {
        let a = Word::new("Run", "to move fast", "English");
        let b = Word::new("rUN", "an act of running", "English");
        let c = Word::new("Ran", "to move fast", "English");
        assert!(a.same_headword(&b));
        assert!(!a.same_headword(&c));
    }

    #[test]
    fn test_sample_words() {
        let samples = Word::sample_words();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].original, "Hello");
        assert!(samples.iter().all(|w| w.language == "Spanish"));
    }

    #[test]
    fn test_missing_bookmark_flag_defaults_to_false() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "original": "cat",
            "translation": "a small feline",
            "language": "English"
        }"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert!(!word.is_bookmarked);
    }
}
