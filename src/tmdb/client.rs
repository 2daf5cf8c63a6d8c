use reqwest::Url;
use tracing::debug;

use super::endpoints::Endpoint;
use super::types::*;
use crate::config::TmdbConfig;
use crate::upstream::{UpstreamClient, UpstreamError, UpstreamResult};

/// TMDb queries on top of [`UpstreamClient`]. Holds the credential.
#[derive(Debug, Clone)]
pub struct Tmdb {
    config: TmdbConfig,
    client: UpstreamClient,
}

impl Tmdb {
    pub fn new(config: TmdbConfig, client: UpstreamClient) -> Self {
        Self { config, client }
    }

    pub fn client(&self) -> &UpstreamClient {
        &self.client
    }

    pub fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }

    /// `<base_url>/<path>?api_key=<key>&<params>`.
    ///
    /// A base URL that doesn't parse is not rejected here; the failure
    /// surfaces as a transport error on the GET.
    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> UpstreamResult<Url> {
        let raw = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("api_key", self.config.api_key.as_str()));
        query.extend_from_slice(params);

        Url::parse_with_params(&raw, &query)
            .map_err(|e| UpstreamError::Transport(format!("invalid URL {}: {}", raw, e)))
    }

    pub fn endpoint_url(&self, endpoint: &Endpoint) -> UpstreamResult<Url> {
        self.url(endpoint.path, endpoint.params)
    }

    pub fn search_url(&self, title: &str) -> UpstreamResult<Url> {
        self.url("search/movie", &[("query", title)])
    }

    pub fn recommendations_url(&self, movie_id: i64) -> UpstreamResult<Url> {
        self.url(&format!("movie/{}/recommendations", movie_id), &[])
    }

    pub async fn search(&self, title: &str) -> UpstreamResult<UpstreamResponse<Movie>> {
        self.client.fetch(&self.search_url(title)?).await
    }

    /// Id of the first search hit for `title`.
    pub async fn resolve_title(&self, title: &str) -> UpstreamResult<i64> {
        let url = self.search_url(title)?;
        let resp: UpstreamResponse<SearchResult> = self.client.fetch_json(&url).await?;

        let id = resp
            .results
            .first()
            .map(|r| r.id)
            .ok_or_else(|| UpstreamError::NotFound(title.to_string()))?;

        debug!("Resolved title {:?} to movie {}", title, id);
        Ok(id)
    }

    pub async fn recommendations(&self, movie_id: i64) -> UpstreamResult<Vec<Movie>> {
        let url = self.recommendations_url(movie_id)?;
        Ok(self.client.fetch(&url).await?.results)
    }

    pub async fn recommendations_for_title(&self, title: &str) -> UpstreamResult<Vec<Movie>> {
        let movie_id = self.resolve_title(title).await?;
        self.recommendations(movie_id).await
    }
}

/// Absolute poster URLs for every movie that has a poster path, in order.
pub fn poster_urls(movies: &[Movie], image_base_url: &str) -> Vec<String> {
    movies
        .iter()
        .filter_map(|m| m.poster_path.as_deref())
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", image_base_url, p))
        .collect()
}
