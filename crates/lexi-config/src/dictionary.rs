use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_language_label() -> String {
    "English".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_min_query_chars() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lookup endpoint, the encoded query is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Label stamped on every word produced by this source
    #[serde(default = "default_language_label")]
    pub language_label: String,
    /// Whole-request timeout, 0 disables it
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Shorter queries never reach the network
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language_label: default_language_label(),
            timeout_seconds: default_timeout_seconds(),
            min_query_chars: default_min_query_chars(),
        }
    }
}

impl DictionaryConfig {
    pub fn from_env() -> Self {
        let api_url = env::var("LEXI_API_URL").unwrap_or_else(|_| default_api_url());

        let language_label =
            env::var("LEXI_LANGUAGE_LABEL").unwrap_or_else(|_| default_language_label());

        let timeout_seconds = env::var("LEXI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let min_query_chars = env::var("LEXI_MIN_QUERY_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_query_chars);

        Self {
            api_url,
            language_label,
            timeout_seconds,
            min_query_chars,
        }
    }
}
