//! Subscription handlers
//!
//! Endpoints for following channels. Request bodies are ignored.

use axum::{extract::State, Json};
use tube_service::dto::{SubscribersResponse, SubscriptionStatusResponse};
use tube_service::SubscriptionService;

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Whether the caller is subscribed to a channel
///
/// GET /users/{id}/subscription-status
pub async fn subscription_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<SubscriptionStatusResponse>> {
    let service = SubscriptionService::new(state.service_context());
    let status = service.status(auth.user_id, channel_id).await?;
    Ok(Json(status))
}

/// Subscribe to a channel
///
/// POST /users/{id}/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<SubscribersResponse>> {
    let service = SubscriptionService::new(state.service_context());
    let response = service.subscribe(auth.user_id, channel_id).await?;
    Ok(Json(response))
}

/// Unsubscribe from a channel
///
/// POST /users/{id}/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<SubscribersResponse>> {
    let service = SubscriptionService::new(state.service_context());
    let response = service.unsubscribe(auth.user_id, channel_id).await?;
    Ok(Json(response))
}
