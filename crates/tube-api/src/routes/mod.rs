//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, comments, health, reactions, subscriptions, users, videos};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(video_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User (channel) routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me/subscriptions", get(users::get_my_subscriptions))
        .route("/users/:id", get(users::get_user))
        .route(
            "/users/:id/subscription-status",
            get(subscriptions::subscription_status),
        )
        .route("/users/:id/subscribe", post(subscriptions::subscribe))
        .route("/users/:id/unsubscribe", post(subscriptions::unsubscribe))
}

/// Video routes
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(videos::list_videos).post(videos::create_video))
        .route("/videos/search", get(videos::search_videos))
        .route("/videos/user/:id", get(videos::get_user_videos))
        .route("/videos/:id", get(videos::get_video))
        .route("/videos/:id/recommended", get(videos::recommended_videos))
        .route(
            "/videos/:id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/videos/:id/like-status", get(reactions::like_status))
        .route("/videos/:id/like", post(reactions::like))
        .route("/videos/:id/dislike", post(reactions::dislike))
}
