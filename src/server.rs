use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::catalog::{MovieCatalog, MovieRepo, RecommendationIndex, RecommendationRepo};
use crate::config::Config;

/// Server context handed to every handler. The two stores are the only
/// mutable shared state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<MovieCatalog>,
    pub recommendations: Arc<RecommendationIndex>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(MovieCatalog::new()),
            recommendations: Arc::new(RecommendationIndex::new()),
        }
    }

    /// Apply the configured seed data through the regular write paths.
    pub async fn seed(&self) {
        for movie in &self.config.catalog {
            self.catalog.register(movie.clone()).await;
        }
        for (user_id, movie_ids) in &self.config.recommendations {
            for movie_id in movie_ids {
                self.recommendations.add_recommendation(user_id, movie_id).await;
            }
        }
        if !self.config.catalog.is_empty() || !self.config.recommendations.is_empty() {
            info!(
                "Seeded {} movies and recommendations for {} users",
                self.config.catalog.len(),
                self.config.recommendations.len()
            );
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/movies",
            post(crate::api::register_movie).fallback(fallback_handler),
        )
        .route(
            "/users/:user_id/recommendations",
            get(crate::api::get_user_recommendations)
                .post(crate::api::add_recommendation)
                .fallback(fallback_handler),
        )
        .route(
            "/recommendations",
            get(crate::api::get_recommendations).fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .with_state(state);

    // Path rewriting has to happen before the inner router matches.
    Router::new()
        .fallback_service(routes)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    debug!("No route for {}", uri);
    StatusCode::NOT_FOUND
}
