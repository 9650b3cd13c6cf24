use std::collections::HashSet;

use lexi_types::Word;

use crate::entry::DictionaryEntry;

/// Map API entries to words, one per distinct headword (case-insensitive).
///
/// Response order is kept and the first occurrence wins. Entries without any
/// definition are skipped and do not claim their headword.
pub fn normalize_entries(entries: &[DictionaryEntry], language: &str) -> Vec<Word> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for entry in entries {
        let Some(definition) = entry.first_definition() else {
            continue;
        };

        if !seen.insert(entry.word.to_lowercase()) {
            continue;
        }

        words.push(Word::new(entry.word.clone(), definition, language));
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<DictionaryEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_duplicate_headwords_keep_first() {
        let entries = parse(
            r#"[
                {"word":"Run","meanings":[{"partOfSpeech":"verb","definitions":[{"definition":"to move fast"}]}]},
                {"word":"run","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"an act of running"}]}]}
            ]"#,
        );

        let words = normalize_entries(&entries, "English");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].original, "Run");
        assert_eq!(words[0].translation, "to move fast");
        assert_eq!(words[0].language, "English");
        assert!(!words[0].is_bookmarked);
    }

    #[test]
    fn test_keeps_response_order() {
        let entries = parse(
            r#"[
                {"word":"cats","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"plural of cat"}]}]},
                {"word":"cat","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a small feline"}]}]}
            ]"#,
        );

        let words = normalize_entries(&entries, "English");
        let headwords: Vec<_> = words.iter().map(|w| w.original.as_str()).collect();
        assert_eq!(headwords, ["cats", "cat"]);
    }

    #[test]
    fn test_entry_without_definitions_is_skipped() {
        let entries = parse(
            r#"[
                {"word":"Lead","meanings":[{"partOfSpeech":"noun","definitions":[]}]},
                {"word":"lead","meanings":[{"partOfSpeech":"verb","definitions":[{"definition":"to guide"}]}]}
            ]"#,
        );

        let words = normalize_entries(&entries, "English");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].original, "lead");
        assert_eq!(words[0].translation, "to guide");
    }

    #[test]
    fn test_only_first_definition_is_used() {
        let entries = parse(
            r#"[{"word":"bank","meanings":[
                {"partOfSpeech":"noun","definitions":[{"definition":"edge of a river"},{"definition":"a financial institution"}]},
                {"partOfSpeech":"verb","definitions":[{"definition":"to deposit money"}]}
            ]}]"#,
        );

        let words = normalize_entries(&entries, "English");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].translation, "edge of a river");
    }

    #[test]
    fn test_empty_response() {
        assert!(normalize_entries(&[], "English").is_empty());
    }
}
