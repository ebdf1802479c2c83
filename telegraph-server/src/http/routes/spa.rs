//! Single-page application fallback
//!
//! Existing files under the static directory are served as-is; any other
//! path gets `index.html` so the client-side router can take over.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Static file service with an `index.html` fallback.
pub fn service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    fn app(dir: &Path) -> Router {
        Router::new().fallback_service(service(dir))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_existing_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let (status, body) = get(app(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn unknown_paths_get_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();

        let (status, body) = get(app(dir.path()), "/articles/hello-world-abc123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");
    }

    #[tokio::test]
    async fn missing_index_is_404() {
        let dir = tempfile::tempdir().unwrap();

        let (status, _) = get(app(dir.path()), "/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
