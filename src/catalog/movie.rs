use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry. The textual form is a single line of JSON, see
/// [`Movie::to_line`] and [`Movie::from_line`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub category: String,
    pub age_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        age_group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            age_group: age_group.into(),
            content_uri: None,
        }
    }

    pub fn with_content_uri(mut self, uri: impl Into<String>) -> Self {
        self.content_uri = Some(uri.into());
        self
    }

    /// Parse the single-line textual form. The identifier must not be empty.
    pub fn from_line(line: &str) -> Result<Self, MovieError> {
        let movie: Movie = serde_json::from_str(line)?;
        movie.validate()?;
        Ok(movie)
    }

    pub fn to_line(&self) -> Result<String, MovieError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), MovieError> {
        if self.id.is_empty() {
            return Err(MovieError::EmptyId);
        }
        Ok(())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&line)
    }
}

impl FromStr for Movie {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Movie::from_line(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("Invalid movie record: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Movie identifier must not be empty")]
    EmptyId,
}
