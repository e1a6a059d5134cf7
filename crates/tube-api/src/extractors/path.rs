//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tube_core::Snowflake;

use crate::response::ApiError;

/// The `:id` segment of a route, parsed as a Snowflake
///
/// Anything that is not a positive integer is rejected with 400 before the
/// handler runs.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path(format!("Invalid id format: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route("/items/:id", get(echo));
        app.oneshot(Request::get(uri).body(axum::body::Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_id() {
        assert_eq!(status_for("/items/123456789").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_ids_are_bad_requests() {
        assert_eq!(status_for("/items/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("/items/0").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("/items/-4").await, StatusCode::BAD_REQUEST);
    }
}
