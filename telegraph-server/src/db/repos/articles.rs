//! Article repository
//!
//! Five statements, one per API operation. Lookups are by slug; the
//! numeric id never leaves the database except in responses.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{ArticleContent, ArticleTitle, Paginated, Pagination, Slug};

const RESOURCE: &str = "article";

/// Full article record
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry with content cut down to a preview
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArticleSummary {
    pub id: i32,
    pub title: String,
    pub preview: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for an insert
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub slug: Slug,
}

impl NewArticle {
    /// Build an insert, generating the slug from the title.
    pub fn new(title: ArticleTitle, content: ArticleContent) -> Self {
        let slug = Slug::generate(&title);
        Self {
            title,
            content,
            slug,
        }
    }
}

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List newest first, with the first 200 characters of content.
    ///
    /// The total comes from a separate COUNT so it stays correct for pages
    /// past the end.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<ArticleSummary>, DbError> {
        let items: Vec<ArticleSummary> = sqlx::query_as(
            r#"
            SELECT id, title, LEFT(content, 200) AS preview, slug, created_at
            FROM articles
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool)
            .await?;

        Ok(Paginated {
            items,
            total,
            pagination: page,
        })
    }

    /// Get a single article by slug.
    pub async fn get(&self, slug: &str) -> Result<Article, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, content, slug, created_at, updated_at
            FROM articles
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(slug))
    }

    /// Insert a new article.
    ///
    /// A slug collision surfaces as `DbError::Conflict`; it is not retried.
    pub async fn create(&self, article: NewArticle) -> Result<Article, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO articles (title, content, slug)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, slug, created_at, updated_at
            "#,
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.slug.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::unique_violation(e, RESOURCE, article.slug.as_str()))
    }

    /// Replace title and content, bumping `updated_at`. The slug never changes.
    pub async fn update(
        &self,
        slug: &str,
        title: ArticleTitle,
        content: ArticleContent,
    ) -> Result<Article, DbError> {
        sqlx::query_as(
            r#"
            UPDATE articles
            SET title = $1, content = $2, updated_at = NOW()
            WHERE slug = $3
            RETURNING id, title, content, slug, created_at, updated_at
            "#,
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(slug))
    }

    /// Hard-delete an article.
    pub async fn delete(&self, slug: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = $1")
            .bind(slug)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(slug));
        }
        Ok(())
    }
}

fn not_found(slug: &str) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: slug.to_owned(),
    }
}
