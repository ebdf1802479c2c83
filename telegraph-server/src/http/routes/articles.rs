//! Article endpoints
//!
//! List, get, create, update and delete, all keyed by slug.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Article, ArticleRepo, ArticleSummary, NewArticle};
use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::http::server::AppState;
use crate::models::{ArticleContent, ArticleTitle, PageMeta, Pagination, PaginationParams};

/// Create/update article request
#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleRequest {
    fn validate(&self) -> Result<(ArticleTitle, ArticleContent), ApiError> {
        let content = ArticleContent::new(self.content.as_deref())?;
        let title = ArticleTitle::new(self.title.as_deref())?;
        Ok((title, content))
    }
}

/// Paginated list response
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleSummary>,
    pub meta: PageMeta,
}

/// GET /articles - list articles, newest first
async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    // Pairs rather than a struct, so a repeated key cannot reject the request
    let page = Pagination::from(pairs.into_iter().collect::<PaginationParams>());
    let result = ArticleRepo::new(&state.pool).list(page).await?;

    let meta = result.meta();
    Ok(Json(ArticleListResponse {
        data: result.items,
        meta,
    }))
}

/// GET /articles/{slug} - get a single article
async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = ArticleRepo::new(&state.pool).get(&slug).await?;
    Ok(Json(article))
}

/// POST /articles - create a new article
async fn create_article(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<ArticleRequest>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let (title, content) = req.validate()?;
    let article = ArticleRepo::new(&state.pool)
        .create(NewArticle::new(title, content))
        .await?;

    tracing::debug!(slug = %article.slug, "Article created");
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /articles/{slug} - replace title and content
async fn update_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    JsonOrForm(req): JsonOrForm<ArticleRequest>,
) -> Result<Json<Article>, ApiError> {
    let (title, content) = req.validate()?;
    let article = ArticleRepo::new(&state.pool)
        .update(&slug, title, content)
        .await?;

    Ok(Json(article))
}

/// DELETE /articles/{slug} - hard delete
async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    ArticleRepo::new(&state.pool).delete(&slug).await?;

    tracing::debug!(slug = %slug, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/{slug}",
            get(get_article).put(update_article).delete(delete_article),
        )
}
