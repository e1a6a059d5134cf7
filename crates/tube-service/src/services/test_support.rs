//! Shared fixtures for service tests: a context over the in-memory store

use std::sync::Arc;

use tube_common::JwtService;
use tube_core::{Snowflake, SnowflakeGenerator};
use tube_db::MemoryStore;

use super::{AuthService, ServiceContext, ServiceContextBuilder, VideoService};
use crate::dto::{CreateVideoRequest, RegisterRequest};

pub(crate) fn context() -> ServiceContext {
    let store = Arc::new(MemoryStore::new());
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .video_repo(store.clone())
        .comment_repo(store.clone())
        .ledger(store)
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}

pub(crate) async fn register(ctx: &ServiceContext, name: &str) -> Snowflake {
    AuthService::new(ctx)
        .register(RegisterRequest {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password: "Password123".to_string(),
        })
        .await
        .unwrap()
        .id
}

pub(crate) async fn upload(ctx: &ServiceContext, owner: Snowflake, title: &str) -> Snowflake {
    upload_in(ctx, owner, title, "music").await
}

pub(crate) async fn upload_in(
    ctx: &ServiceContext,
    owner: Snowflake,
    title: &str,
    category: &str,
) -> Snowflake {
    VideoService::new(ctx)
        .create(
            owner,
            CreateVideoRequest {
                title: title.to_string(),
                description: None,
                category: Some(category.to_string()),
                video_url: "https://cdn.example.com/v.mp4".to_string(),
                thumbnail_url: None,
                duration: Some("3:07".to_string()),
            },
        )
        .await
        .unwrap()
        .id
}
