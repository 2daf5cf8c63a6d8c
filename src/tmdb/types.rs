use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "link", default, skip_serializing_if = "Option::is_none")]
    pub detail_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// A search hit; only the id is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
}

/// The `{"results": [...]}` envelope of every TMDb list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResponse<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// `/genre/movie/list` answers with `genres` instead of `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterUrls {
    pub poster_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub recommendations: Vec<Movie>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
