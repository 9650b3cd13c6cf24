use std::time::Duration;

use lexi_config::dictionary::DictionaryConfig;
use lexi_types::Word;
use reqwest::StatusCode;

use crate::entry::DictionaryEntry;
use crate::normalize::normalize_entries;
use crate::{DictionarySource, LookupError, SourceMetadata};

/// HTTP client for the dictionaryapi.dev entries endpoint
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    api_url: String,
    language: String,
}

impl DictionaryApiClient {
    pub fn new(api_url: String, language: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            language,
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self, LookupError> {
        reqwest::Url::parse(&config.api_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.clone(),
            language: config.language_label.clone(),
        })
    }

    /// Endpoint for a query, encoded as a single path segment
    pub fn lookup_url(&self, query: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }
}

#[async_trait::async_trait]
impl DictionarySource for DictionaryApiClient {
    async fn lookup(&self, query: &str) -> Result<Vec<Word>, LookupError> {
        let url = self.lookup_url(query);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("No dictionary entry for '{}'", query);
            return Ok(Vec::new());
        }

        if status != StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let entries: Vec<DictionaryEntry> = serde_json::from_slice(&body)?;
        tracing::debug!("'{}': {} entries", query, entries.len());

        Ok(normalize_entries(&entries, &self.language))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Free Dictionary API".to_string(),
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response and hand back the request line
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}/api/v2/entries/en", addr), handle)
    }

    fn client(api_url: String) -> DictionaryApiClient {
        DictionaryApiClient::new(api_url, "English".to_string())
    }

    #[test]
    fn test_lookup_url_encodes_path_segment() {
        let client = client("https://example.com/entries/en/".to_string());
        assert_eq!(
            client.lookup_url("ice cream"),
            "https://example.com/entries/en/ice%20cream"
        );
        assert_eq!(
            client.lookup_url("a/b?c"),
            "https://example.com/entries/en/a%2Fb%3Fc"
        );
        assert_eq!(client.lookup_url("café"), "https://example.com/entries/en/caf%C3%A9");
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = DictionaryConfig {
            api_url: "not a url".to_string(),
            ..DictionaryConfig::default()
        };
        assert!(matches!(
            DictionaryApiClient::from_config(&config),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_ok() {
        let body = r#"[
            {"word":"Run","meanings":[{"partOfSpeech":"verb","definitions":[{"definition":"to move fast"}]}]},
            {"word":"run","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"an act of running"}]}]}
        ]"#;
        let (url, server) = serve_once("200 OK", body).await;

        let words = client(url).lookup("run").await.unwrap();
        let request_line = server.await.unwrap();

        assert_eq!(request_line, "GET /api/v2/entries/en/run HTTP/1.1");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].original, "Run");
        assert_eq!(words[0].translation, "to move fast");
        assert_eq!(words[0].language, "English");
    }

    #[tokio::test]
    async fn test_lookup_not_found_is_empty() {
        let body = r#"{"title":"No Definitions Found","message":"Sorry pal"}"#;
        let (url, server) = serve_once("404 Not Found", body).await;

        let words = client(url).lookup("qwxz").await.unwrap();
        server.await.unwrap();

        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_server_error() {
        let (url, server) = serve_once("500 Internal Server Error", "").await;

        let result = client(url).lookup("cat").await;
        server.await.unwrap();

        assert!(matches!(result, Err(LookupError::Status(500))));
    }

    #[tokio::test]
    async fn test_lookup_non_200_success_is_rejected() {
        let (url, server) = serve_once("204 No Content", "").await;

        let result = client(url).lookup("cat").await;
        server.await.unwrap();

        assert!(matches!(result, Err(LookupError::Status(204))));
    }

    #[tokio::test]
    async fn test_lookup_malformed_body() {
        let (url, server) = serve_once("200 OK", r#"{"word": "cat"}"#).await;

        let result = client(url).lookup("cat").await;
        server.await.unwrap();

        assert!(matches!(result, Err(LookupError::Decode(_))));
    }

    #[tokio::test]
    async fn test_lookup_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(format!("http://{}/api", addr)).lookup("cat").await;
        assert!(matches!(result, Err(LookupError::Network(_))));
    }
}
