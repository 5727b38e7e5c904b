use async_trait::async_trait;
use std::collections::BTreeSet;

use super::movie::Movie;

pub type MoviePredicate<'a> = dyn Fn(&Movie) -> bool + Send + Sync + 'a;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Insert or fully replace the record keyed by `movie.id`.
    async fn register(&self, movie: Movie);
    async fn get(&self, id: &str) -> Option<Movie>;
    /// Resolve a batch of ids against one snapshot. Unknown ids are skipped.
    async fn get_many(&self, ids: &BTreeSet<String>) -> Vec<Movie>;
    async fn find_matching(&self, predicate: &MoviePredicate<'_>) -> Vec<Movie>;
}

#[async_trait]
pub trait RecommendationRepo: Send + Sync {
    async fn add_recommendation(&self, user_id: &str, movie_id: &str);
    async fn get_recommendations(&self, user_id: &str) -> BTreeSet<String>;
}
