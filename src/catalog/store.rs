use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;
use tracing::debug;

use super::movie::Movie;
use super::repo::{MoviePredicate, MovieRepo, RecommendationRepo};

/// In-memory movie catalog. Iteration is in ascending id order.
#[derive(Default)]
pub struct MovieCatalog {
    movies: RwLock<BTreeMap<String, Movie>>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieRepo for MovieCatalog {
    async fn register(&self, movie: Movie) {
        let mut movies = self.movies.write().await;
        let id = movie.id.clone();
        match movies.insert(id.clone(), movie) {
            Some(_) => debug!("Replaced movie {}", id),
            None => debug!("Added movie {}", id),
        }
    }

    async fn get(&self, id: &str) -> Option<Movie> {
        let movies = self.movies.read().await;
        movies.get(id).cloned()
    }

    async fn get_many(&self, ids: &BTreeSet<String>) -> Vec<Movie> {
        let movies = self.movies.read().await;
        ids.iter().filter_map(|id| movies.get(id).cloned()).collect()
    }

    async fn find_matching(&self, predicate: &MoviePredicate<'_>) -> Vec<Movie> {
        let movies = self.movies.read().await;
        movies.values().filter(|m| predicate(m)).cloned().collect()
    }
}

/// Per-user sets of recommended movie ids.
#[derive(Default)]
pub struct RecommendationIndex {
    users: RwLock<BTreeMap<String, BTreeSet<String>>>,
}

impl RecommendationIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecommendationRepo for RecommendationIndex {
    async fn add_recommendation(&self, user_id: &str, movie_id: &str) {
        let mut users = self.users.write().await;
        let added = users
            .entry(user_id.to_string())
            .or_default()
            .insert(movie_id.to_string());
        if !added {
            debug!("User {} already has recommendation {}", user_id, movie_id);
        }
    }

    async fn get_recommendations(&self, user_id: &str) -> BTreeSet<String> {
        let users = self.users.read().await;
        users.get(user_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_register_is_last_write_wins() {
        let catalog = MovieCatalog::new();
        catalog.register(Movie::new("1", "Old", "Drama", "18+")).await;
        catalog.register(Movie::new("1", "New", "Comedy", "7+")).await;

        assert_eq!(catalog.len().await, 1);
        assert_eq!(catalog.get("1").await.unwrap().title, "New");
        assert!(catalog.get("2").await.is_none());
    }

    #[tokio::test]
    async fn test_register_twice_is_idempotent() {
        let catalog = MovieCatalog::new();
        let movie = Movie::new("1", "Orange is the New Black", "Drama", "18+");
        catalog.register(movie.clone()).await;
        let once = catalog.find_matching(&|_: &Movie| true).await;
        catalog.register(movie.clone()).await;
        let twice = catalog.find_matching(&|_: &Movie| true).await;

        assert_eq!(once, twice);
        assert_eq!(twice, vec![movie]);
    }

    #[tokio::test]
    async fn test_iteration_order_is_deterministic() {
        let catalog = MovieCatalog::new();
        for id in ["c", "a", "b"] {
            catalog.register(Movie::new(id, id, "Drama", "18+")).await;
        }
        let ids: Vec<String> = catalog
            .find_matching(&|_: &Movie| true)
            .await
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_get_many_skips_unknown() {
        let catalog = MovieCatalog::new();
        catalog.register(Movie::new("1", "One", "Drama", "18+")).await;
        let ids: BTreeSet<String> = ["1", "missing"].iter().map(|s| s.to_string()).collect();

        let movies = catalog.get_many(&ids).await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, "1");
    }

    #[tokio::test]
    async fn test_recommendation_set_semantics() {
        let index = RecommendationIndex::new();
        index.add_recommendation("user1", "1").await;
        index.add_recommendation("user1", "1").await;

        assert_eq!(index.get_recommendations("user1").await.len(), 1);
        assert!(index.get_recommendations("nobody").await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes() {
        let catalog = Arc::new(MovieCatalog::new());
        let index = Arc::new(RecommendationIndex::new());

        let mut tasks = Vec::new();
        for i in 0..50 {
            let catalog = catalog.clone();
            let index = index.clone();
            tasks.push(tokio::spawn(async move {
                let id = format!("m{}", i % 10);
                catalog.register(Movie::new(id.clone(), "t", "Drama", "18+")).await;
                index.add_recommendation("user1", &id).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(catalog.len().await, 10);
        assert_eq!(index.get_recommendations("user1").await.len(), 10);
    }
}
