pub mod matcher;
pub mod movie;
pub mod repo;
pub mod store;

pub use matcher::{by_criteria, by_user, Criteria};
pub use movie::{Movie, MovieError};
pub use repo::{MoviePredicate, MovieRepo, RecommendationRepo};
pub use store::{MovieCatalog, RecommendationIndex};
