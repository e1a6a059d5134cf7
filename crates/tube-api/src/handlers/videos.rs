//! Video handlers

use axum::{extract::State, Json};
use tube_service::dto::{CreateVideoRequest, ListVideosQuery, SearchVideosQuery, VideoResponse};
use tube_service::VideoService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register an uploaded video
///
/// POST /videos
pub async fn create_video(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> ApiResult<Created<Json<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let video = service.create(auth.user_id, request).await?;
    Ok(Created(Json(video)))
}

/// Get a video with counts and uploader
///
/// GET /videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<VideoResponse>> {
    let service = VideoService::new(state.service_context());
    let video = service.get_video(video_id).await?;
    Ok(Json(video))
}

/// Videos uploaded by a channel, newest first
///
/// GET /videos/user/{id}
pub async fn get_user_videos(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.list_by_owner(user_id).await?;
    Ok(Json(videos))
}

/// Home feed, newest first
///
/// GET /videos?category=&limit=
pub async fn list_videos(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListVideosQuery>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.list(query).await?;
    Ok(Json(videos))
}

/// Search titles and descriptions
///
/// GET /videos/search?q=&sort=relevance|date|rating&limit=
pub async fn search_videos(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchVideosQuery>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.search(query).await?;
    Ok(Json(videos))
}

/// Videos to watch next
///
/// GET /videos/{id}/recommended
pub async fn recommended_videos(
    State(state): State<AppState>,
    IdPath(video_id): IdPath,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.recommended(video_id).await?;
    Ok(Json(videos))
}
