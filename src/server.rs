use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::tmdb::{self, Tmdb, ENDPOINTS};
use crate::upstream::{UpstreamClient, UpstreamResult};

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<Tmdb>,
}

impl AppState {
    pub fn new(config: Config) -> UpstreamResult<Self> {
        let client = UpstreamClient::new(Duration::from_secs(config.tmdb.timeout_secs))?;
        let tmdb = Tmdb::new(config.tmdb, client);

        Ok(Self {
            tmdb: Arc::new(tmdb),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/recommendations", get(tmdb::poster_recommendations))
        .route("/recommendations2", get(tmdb::title_recommendations));

    for endpoint in ENDPOINTS {
        router = router.route(
            endpoint.route,
            get(move |State(state): State<AppState>| {
                tmdb::list_endpoint(state, endpoint)
            }),
        );
    }

    router
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight for paths we don't route explicitly
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
