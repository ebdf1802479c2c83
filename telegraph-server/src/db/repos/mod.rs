//! Repository implementations for database access

pub mod articles;

pub use articles::{Article, ArticleRepo, ArticleSummary, NewArticle};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        Self::Sqlx(e)
    }
}

impl DbError {
    /// Map a unique-constraint violation to `Conflict`, pass anything else through.
    pub(crate) fn unique_violation(e: sqlx::Error, resource: &'static str, id: &str) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                resource,
                id: id.to_owned(),
            },
            _ => Self::Sqlx(e),
        }
    }
}
