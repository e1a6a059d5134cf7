//! Comment handlers

use axum::{extract::State, Json};
use tube_service::dto::{CommentResponse, CreateCommentRequest};
use tube_service::CommentService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Comments under a video, newest first
///
/// GET /videos/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list(video_id).await?;
    Ok(Json(comments))
}

/// Post a comment as the caller
///
/// POST /videos/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(video_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, video_id, request).await?;
    Ok(Created(Json(comment)))
}
