//! TinyURL create-API client.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{Result, SnaplinkError};

/// The external shorten call, abstracted for testing.
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// Shorten `url`, returning the short URL on success.
    async fn shorten(&self, url: &str) -> Result<String>;
}

/// Client for the TinyURL create endpoint.
///
/// The endpoint takes the original URL percent-encoded into a query
/// parameter and answers with the short URL as a plain-text body.
pub struct TinyUrlClient {
    http: reqwest::Client,
    api_endpoint: String,
}

impl TinyUrlClient {
    /// Create a new client. `api_endpoint` is the prefix up to and
    /// including `?url=`.
    pub fn new(http: reqwest::Client, api_endpoint: String) -> Self {
        Self { http, api_endpoint }
    }

    /// The full request URL for one shorten call.
    fn request_url(&self, url: &str) -> String {
        format!("{}{}", self.api_endpoint, urlencoding::encode(url))
    }
}

#[async_trait]
impl ShortenApi for TinyUrlClient {
    async fn shorten(&self, url: &str) -> Result<String> {
        let request_url = self.request_url(url);
        debug!(request_url = %request_url, "Issuing shorten request");

        let response = self.http.get(&request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SnaplinkError::ShortenStatus(status));
        }

        let body = response.text().await?;
        parse_short_url(&body)
    }
}

/// Extract the short URL from a response body.
///
/// The body must hold a single absolute URL once surrounding whitespace is
/// trimmed. Anything else, including an HTML error page served with a 200,
/// counts as malformed.
fn parse_short_url(body: &str) -> Result<String> {
    let short_url = body.trim();
    if short_url.is_empty() || Url::parse(short_url).is_err() {
        return Err(SnaplinkError::MalformedResponse);
    }
    Ok(short_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_percent_encodes_the_input() {
        let client = TinyUrlClient::new(
            reqwest::Client::new(),
            "https://tinyurl.com/api-create.php?url=".to_string(),
        );

        let request_url = client.request_url("https://example.com/a path?q=1&x=2");

        assert_eq!(
            request_url,
            "https://tinyurl.com/api-create.php?url=https%3A%2F%2Fexample.com%2Fa%20path%3Fq%3D1%26x%3D2"
        );
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let short_url = parse_short_url("https://tinyurl.com/abc123\n").unwrap();
        assert_eq!(short_url, "https://tinyurl.com/abc123");
    }

    #[test]
    fn test_parse_rejects_an_empty_body() {
        assert!(matches!(
            parse_short_url("  \n"),
            Err(SnaplinkError::MalformedResponse)
        ));
    }

    #[test]
    fn test_parse_rejects_a_body_that_is_not_a_url() {
        assert!(matches!(
            parse_short_url("<html>something went wrong</html>"),
            Err(SnaplinkError::MalformedResponse)
        ));
    }
}
