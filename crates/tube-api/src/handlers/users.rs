//! User handlers
//!
//! Channel profiles. Every user is a channel.

use axum::{extract::State, Json};
use tube_service::dto::ChannelResponse;
use tube_service::{ChannelService, SubscriptionService};

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a channel profile
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<ChannelResponse>> {
    let service = ChannelService::new(state.service_context());
    let channel = service.get_channel(user_id).await?;
    Ok(Json(channel))
}

/// Channels the caller is subscribed to
///
/// GET /users/me/subscriptions
pub async fn get_my_subscriptions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = SubscriptionService::new(state.service_context());
    let channels = service.my_subscriptions(auth.user_id).await?;
    Ok(Json(channels))
}
