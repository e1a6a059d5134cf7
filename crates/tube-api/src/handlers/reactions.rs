//! Reaction handlers
//!
//! Like/dislike endpoints. Repeating an action retracts it.

use axum::{extract::State, Json};
use tube_service::dto::{LikeStatusResponse, ReactionCountsResponse};
use tube_service::ReactionService;

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// The caller's reaction on a video
///
/// GET /videos/{id}/like-status
pub async fn like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<LikeStatusResponse>> {
    let service = ReactionService::new(state.service_context());
    let status = service.status(auth.user_id, video_id).await?;
    Ok(Json(status))
}

/// Like a video
///
/// POST /videos/{id}/like
pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let service = ReactionService::new(state.service_context());
    let counts = service.like(auth.user_id, video_id).await?;
    Ok(Json(counts))
}

/// Dislike a video
///
/// POST /videos/{id}/dislike
pub async fn dislike(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let service = ReactionService::new(state.service_context());
    let counts = service.dislike(auth.user_id, video_id).await?;
    Ok(Json(counts))
}
