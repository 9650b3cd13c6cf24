use serde::Deserialize;

// Wire format of the dictionaryapi.dev entries endpoint. Unknown fields are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
}

impl DictionaryEntry {
    /// First definition of the first meaning that has one
    pub fn first_definition(&self) -> Option<&str> {
        self.meanings
            .iter()
            .find_map(|meaning| meaning.definitions.first())
            .map(|d| d.definition.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"[{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [{ "text": "həˈləʊ", "audio": "" }],
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{
                    "definition": "used as a greeting",
                    "example": "hello there, Katie!",
                    "synonyms": [],
                    "antonyms": []
                }]
            }],
            "license": { "name": "CC BY-SA 3.0" }
        }]"#;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meanings[0].part_of_speech, "exclamation");
        assert_eq!(entries[0].first_definition(), Some("used as a greeting"));
    }

    #[test]
    fn test_first_definition_skips_empty_meanings() {
        let json = r#"{
            "word": "set",
            "meanings": [
                { "partOfSpeech": "noun", "definitions": [] },
                { "partOfSpeech": "verb", "definitions": [
                    { "definition": "to put something somewhere" },
                    { "definition": "to fix firmly" }
                ]}
            ]
        }"#;

        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.first_definition(), Some("to put something somewhere"));
    }

    #[test]
    fn test_first_definition_none() {
        let entry: DictionaryEntry = serde_json::from_str(r#"{ "word": "zzz" }"#).unwrap();
        assert_eq!(entry.first_definition(), None);
    }

    #[test]
    fn test_missing_word_is_an_error() {
        let result: Result<DictionaryEntry, _> = serde_json::from_str(r#"{ "meanings": [] }"#);
        assert!(result.is_err());
    }
}
