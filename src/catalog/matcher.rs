use serde::Deserialize;

use super::movie::Movie;
use super::repo::{MovieRepo, RecommendationRepo};

/// Exact-match filter on category and age group. Omitted (or empty)
/// criteria are not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "ageGroup")]
    pub age_group: Option<String>,
}

impl Criteria {
    pub fn new(category: Option<&str>, age_group: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            age_group: age_group.map(str::to_string),
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        field_matches(self.category.as_deref(), &movie.category)
            && field_matches(self.age_group.as_deref(), &movie.age_group)
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(w) if !w.is_empty() => w == actual,
        _ => true,
    }
}

/// Movies recommended to `user_id` that resolve in the catalog.
pub async fn by_user(
    catalog: &dyn MovieRepo,
    index: &dyn RecommendationRepo,
    user_id: &str,
) -> Vec<Movie> {
    let ids = index.get_recommendations(user_id).await;
    if ids.is_empty() {
        return Vec::new();
    }
    catalog.get_many(&ids).await
}

pub async fn by_criteria(catalog: &dyn MovieRepo, criteria: &Criteria) -> Vec<Movie> {
    catalog.find_matching(&|m: &Movie| criteria.matches(m)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MovieCatalog, RecommendationIndex};

    async fn fixture() -> MovieCatalog {
        let catalog = MovieCatalog::new();
        catalog.register(Movie::new("1", "Orange is the New Black", "Drama", "18+")).await;
        catalog.register(Movie::new("2", "Breaking Bad", "Drama", "16+")).await;
        catalog.register(Movie::new("3", "House of Cards", "Political", "18+")).await;
        catalog
    }

    #[tokio::test]
    async fn test_by_criteria_and_semantics() {
        let catalog = fixture().await;
        let movies = by_criteria(&catalog, &Criteria::new(Some("Drama"), Some("18+"))).await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, "1");
    }

    #[tokio::test]
    async fn test_by_criteria_single_and_empty() {
        let catalog = fixture().await;

        let drama = by_criteria(&catalog, &Criteria::new(Some("Drama"), None)).await;
        assert_eq!(drama.len(), 2);

        let adults = by_criteria(&catalog, &Criteria::new(None, Some("18+"))).await;
        assert_eq!(adults.len(), 2);

        let all = by_criteria(&catalog, &Criteria::default()).await;
        assert_eq!(all.len(), 3);

        let blank = by_criteria(&catalog, &Criteria::new(Some(""), Some(""))).await;
        assert_eq!(blank.len(), 3);
    }

    #[tokio::test]
    async fn test_by_criteria_is_case_sensitive() {
        let catalog = fixture().await;
        assert!(by_criteria(&catalog, &Criteria::new(Some("drama"), None)).await.is_empty());
        assert!(by_criteria(&catalog, &Criteria::new(Some("Western"), None)).await.is_empty());
    }

    #[tokio::test]
    async fn test_by_user_skips_dangling_references() {
        let catalog = fixture().await;
        let index = RecommendationIndex::new();
        index.add_recommendation("user1", "1").await;
        index.add_recommendation("user1", "3").await;
        index.add_recommendation("user1", "42").await;
        index.add_recommendation("user2", "42").await;

        let ids: Vec<String> = by_user(&catalog, &index, "user1")
            .await
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert!(by_user(&catalog, &index, "user2").await.is_empty());
        assert!(by_user(&catalog, &index, "unknown").await.is_empty());
    }
}
