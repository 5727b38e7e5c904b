use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{debug, info};

use super::error::ApiError;
use super::lines::MovieLines;
use crate::catalog::{self, Criteria, Movie, MovieRepo, RecommendationRepo};
use crate::server::AppState;

/// `POST /movies` with a serialized movie as the body.
pub async fn register_movie(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let movie = Movie::from_line(&body)?;
    info!("Registering movie {} ({})", movie.id, movie.title);
    state.catalog.register(movie).await;
    Ok(StatusCode::CREATED)
}

/// `POST /users/:user_id/recommendations` with a raw movie id as the body.
pub async fn add_recommendation(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: String,
) -> Result<StatusCode, ApiError> {
    if user_id.is_empty() {
        return Err(ApiError::MissingParameter("user id"));
    }
    // The body is the identifier verbatim, whitespace included.
    if body.is_empty() {
        return Err(ApiError::MissingParameter("movie id"));
    }

    info!("Recommending movie {:?} to user {:?}", body, user_id);
    state
        .recommendations
        .add_recommendation(&user_id, &body)
        .await;
    Ok(StatusCode::OK)
}

pub async fn get_user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> MovieLines {
    let movies = catalog::by_user(
        state.catalog.as_ref(),
        state.recommendations.as_ref(),
        &user_id,
    )
    .await;
    debug!("User {} has {} resolvable recommendations", user_id, movies.len());
    MovieLines(movies)
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(criteria): Query<Criteria>,
) -> MovieLines {
    let movies = catalog::by_criteria(state.catalog.as_ref(), &criteria).await;
    debug!(
        category = ?criteria.category,
        age_group = ?criteria.age_group,
        "{} movies match",
        movies.len()
    );
    MovieLines(movies)
}
