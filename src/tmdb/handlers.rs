use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use super::client::poster_urls;
use super::endpoints::{Endpoint, Shape, FIXED_SEARCH_QUERY};
use super::types::*;
use crate::server::AppState;
use crate::upstream::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request failed with {}: {}", status, self);
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Serves any row of the endpoint table.
pub async fn list_endpoint(state: AppState, endpoint: &'static Endpoint) -> Result<Response, ApiError> {
    let url = state.tmdb.endpoint_url(endpoint)?;
    let client = state.tmdb.client();

    let response = match endpoint.shape {
        Shape::Movies => Json(client.fetch(&url).await?).into_response(),
        Shape::Genres => Json(client.fetch_json::<GenreList>(&url).await?).into_response(),
    };

    Ok(response)
}

pub async fn poster_recommendations(
    State(state): State<AppState>,
) -> Result<Json<PosterUrls>, ApiError> {
    let resp = state.tmdb.search(FIXED_SEARCH_QUERY).await?;

    Ok(Json(PosterUrls {
        poster_urls: poster_urls(&resp.results, state.tmdb.image_base_url()),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    #[serde(default)]
    pub title: Option<String>,
}

pub async fn title_recommendations(
    State(state): State<AppState>,
    query: Result<Query<TitleQuery>, QueryRejection>,
) -> Result<Json<Recommendations>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let title = query
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Movie title is required".to_string()))?;

    let recommendations = state.tmdb.recommendations_for_title(&title).await?;

    Ok(Json(Recommendations { recommendations }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(UpstreamError::NotFound("x".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::from(UpstreamError::NotFound("Nope Movie".to_string()));
        assert_eq!(err.to_string(), "no movie found with title: Nope Movie");
    }
}
