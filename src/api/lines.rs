use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use futures::stream::{self, StreamExt};

use crate::catalog::Movie;

pub const CONTENT_TYPE_NDJSON: &str = "application/x-ndjson";

/// A list of movies written as a streamed body, one serialized record per
/// line. Lines are separated by `\n` with no trailing separator, so an empty
/// list produces an empty body.
///
/// The movies are an owned snapshot: no store lock is held while the body
/// is being flushed. If the client goes away the stream is dropped and the
/// remaining lines are never written.
pub struct MovieLines(pub Vec<Movie>);

impl IntoResponse for MovieLines {
    fn into_response(self) -> Response {
        let lines = stream::iter(self.0.into_iter().enumerate()).map(|(i, movie)| {
            movie.to_line().map(|line| {
                if i == 0 {
                    line
                } else {
                    format!("\n{}", line)
                }
            })
        });

        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, CONTENT_TYPE_NDJSON)],
            Body::from_stream(lines),
        )
            .into_response()
    }
}
