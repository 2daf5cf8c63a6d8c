use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{UpstreamError, UpstreamResult};
use crate::tmdb::{Movie, UpstreamResponse};

/// Query parameters whose values never show up in logs.
const SECRET_PARAMS: &[&str] = &["api_key"];

/// Fetches a URL and decodes the body as JSON.
///
/// Each call is exactly one GET. The whole body is read before it is parsed,
/// and the HTTP status is not inspected: an error document from upstream that
/// doesn't fit the requested shape comes back as [`UpstreamError::Decode`].
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::client)?;

        Ok(Self { http })
    }

    pub async fn fetch_raw(&self, url: &Url) -> UpstreamResult<Bytes> {
        debug!("GET {}", redact(url));

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        debug!("{} from {}", response.status(), redact(url));

        response.bytes().await.map_err(UpstreamError::read)
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> UpstreamResult<T> {
        let body = self.fetch_raw(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a `{"results": [...]}` list of movies.
    pub async fn fetch(&self, url: &Url) -> UpstreamResult<UpstreamResponse<Movie>> {
        self.fetch_json(url).await
    }
}

/// Render `url` with secret query values masked.
pub fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| is_secret(&k)) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if is_secret(&k) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn is_secret(key: &str) -> bool {
    SECRET_PARAMS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_api_key() {
        let url = Url::parse("https://api.themoviedb.org/3/movie/popular?api_key=s3cret&page=1")
            .unwrap();
        let shown = redact(&url);
        assert!(!shown.contains("s3cret"));
        assert!(shown.contains("api_key=***") || shown.contains("api_key=%2A%2A%2A"));
        assert!(shown.contains("page=1"));
    }

    #[test]
    fn test_redact_leaves_plain_urls_alone() {
        let url = Url::parse("https://api.themoviedb.org/3/genre/movie/list?language=en-US").unwrap();
        assert_eq!(redact(&url), url.to_string());
    }
}
