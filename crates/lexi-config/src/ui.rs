use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    20
}

fn default_no_results_message() -> String {
    "No results found".to_string()
}

fn default_short_query_message() -> String {
    "Type at least 2 characters to search".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Rows printed per result list
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
    #[serde(default = "default_short_query_message")]
    pub short_query_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            no_results_message: default_no_results_message(),
            short_query_message: default_short_query_message(),
        }
    }
}
