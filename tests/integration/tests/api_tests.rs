//! API Integration Tests
//!
//! Each test boots the full router (middleware included) over a fresh
//! in-memory store and talks to it over HTTP. The PostgreSQL smoke test at
//! the bottom runs only when DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_json, assert_status, error_code, fixtures::*, postgres_test_config, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer) -> AuthResponse {
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn upload(server: &TestServer, token: &str) -> VideoResponse {
    let response = server
        .post_auth("/api/videos", token, &CreateVideoRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn subscribers(server: &TestServer, token: &str, channel: &str, action: &str) -> i64 {
    let response = server
        .post_auth(&format!("/api/users/{channel}/{action}"), token, &EmptyBody {})
        .await
        .unwrap();
    let body: SubscribersResponse = assert_json(response, StatusCode::OK).await.unwrap();
    body.subscribers
}

async fn react(server: &TestServer, token: &str, video: &str, action: &str) -> (i64, i64) {
    let response = server
        .post_auth(&format!("/api/videos/{video}/{action}"), token, &EmptyBody {})
        .await
        .unwrap();
    let body: ReactionCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (body.likes, body.dislikes)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.username, request.username);
    assert_eq!(auth.email, request.email);
    assert_eq!(auth.subscribers, 0);
    assert!(auth.avatar.is_none());
    assert!(!auth.token.is_empty());
    assert!(auth.id.parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    server.post("/api/auth/register", &request).await.unwrap();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(response).await.unwrap(), "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let server = TestServer::start().await.unwrap();

    let bad_email = RegisterRequest {
        email: "not-an-email".to_string(),
        ..RegisterRequest::unique()
    };
    let response = server.post("/api/auth/register", &bad_email).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(!body["error"]["details"]["email"].is_null());

    let weak = RegisterRequest {
        password: "alllowercase".to_string(),
        ..RegisterRequest::unique()
    };
    let response = server.post("/api/auth/register", &weak).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await.unwrap(), "WEAK_PASSWORD");
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    let registered: AuthResponse = assert_json(
        server.post("/api/auth/register", &request).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.id, registered.id);

    let wrong = LoginRequest {
        email: request.email.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/auth/login", &wrong).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await.unwrap(), "INVALID_CREDENTIALS");
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_engagement_requires_bearer_token() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let video = upload(&server, &owner.token).await;
    let channel = owner.id.clone();

    let mutations = [
        format!("/api/users/{channel}/subscribe"),
        format!("/api/users/{channel}/unsubscribe"),
        format!("/api/videos/{}/like", video.id),
        format!("/api/videos/{}/dislike", video.id),
    ];
    for path in &mutations {
        let response = server.post(path, &EmptyBody {}).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");

        let response = server
            .post_auth(path, "not.a.token", &EmptyBody {})
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }

    let reads = [
        format!("/api/users/{channel}/subscription-status"),
        format!("/api/videos/{}/like-status", video.id),
        "/api/users/me/subscriptions".to_string(),
    ];
    for path in &reads {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }

    // Nothing was applied
    let response = server.get(&format!("/api/videos/{}", video.id)).await.unwrap();
    let video: VideoResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((video.likes, video.dislikes), (0, 0));
    assert_eq!(video.user.subscribers, 0);
}

#[tokio::test]
async fn test_token_from_other_server_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let other = TestServer::start_with_config(
        integration_tests::test_config(&[("JWT_SECRET", "a-different-secret")]).unwrap(),
    )
    .await
    .unwrap();

    let channel = register(&server).await;
    let stranger = register(&other).await;

    let response = server
        .post_auth(
            &format!("/api/users/{}/subscribe", channel.id),
            &stranger.token,
            &EmptyBody {},
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let me = register(&server).await;

    for path in [
        "/api/users/not-a-number/subscribe",
        "/api/videos/abc/like",
        "/api/videos/-1/dislike",
    ] {
        let response = server.post_auth(path, &me.token, &EmptyBody {}).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(error_code(response).await.unwrap(), "INVALID_PATH_PARAMETER");
    }
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_subscription_scenario() {
    let server = TestServer::start().await.unwrap();
    let channel = register(&server).await;
    for _ in 0..5 {
        let fan = register(&server).await;
        subscribers(&server, &fan.token, &channel.id, "subscribe").await;
    }
    let u1 = register(&server).await;
    let status_path = format!("/api/users/{}/subscription-status", channel.id);

    assert_eq!(subscribers(&server, &u1.token, &channel.id, "subscribe").await, 6);
    let status: SubscriptionStatusResponse = assert_json(
        server.get_auth(&status_path, &u1.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(status.is_subscribed);

    assert_eq!(subscribers(&server, &u1.token, &channel.id, "subscribe").await, 6);
    assert_eq!(subscribers(&server, &u1.token, &channel.id, "unsubscribe").await, 5);
    assert_eq!(subscribers(&server, &u1.token, &channel.id, "unsubscribe").await, 5);

    let status: SubscriptionStatusResponse = assert_json(
        server.get_auth(&status_path, &u1.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!status.is_subscribed);

    let profile: ChannelResponse = assert_json(
        server.get(&format!("/api/users/{}", channel.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(profile.subscribers, 5);
}

#[tokio::test]
async fn test_self_subscription_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let me = register(&server).await;

    let response = server
        .post_auth(&format!("/api/users/{}/subscribe", me.id), &me.token, &EmptyBody {})
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await.unwrap(), "SELF_SUBSCRIPTION");

    let profile: ChannelResponse = assert_json(
        server.get(&format!("/api/users/{}", me.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(profile.subscribers, 0);
}

#[tokio::test]
async fn test_unknown_channel_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let me = register(&server).await;
    let ghost = "123456789";

    for action in ["subscribe", "unsubscribe"] {
        let response = server
            .post_auth(&format!("/api/users/{ghost}/{action}"), &me.token, &EmptyBody {})
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{action}");
    }

    let response = server
        .get_auth(&format!("/api/users/{ghost}/subscription-status"), &me.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get(&format!("/api/users/{ghost}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_subscriptions() {
    let server = TestServer::start().await.unwrap();
    let me = register(&server).await;
    let first = register(&server).await;
    let second = register(&server).await;

    subscribers(&server, &me.token, &first.id, "subscribe").await;
    subscribers(&server, &me.token, &second.id, "subscribe").await;

    let channels: Vec<ChannelResponse> = assert_json(
        server
            .get_auth("/api/users/me/subscriptions", &me.token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let ids: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
}

#[tokio::test]
async fn test_concurrent_subscribers_are_all_counted() {
    let server = TestServer::start().await.unwrap();
    let channel = register(&server).await;
    let mut fans = Vec::new();
    for _ in 0..20 {
        fans.push(register(&server).await);
    }

    let counts = join_all(
        fans.iter()
            .map(|fan| subscribers(&server, &fan.token, &channel.id, "subscribe")),
    )
    .await;
    assert!(counts.iter().all(|c| (1..=20).contains(c)));
    assert!(counts.contains(&20));

    let profile: ChannelResponse = assert_json(
        server.get(&format!("/api/users/{}", channel.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(profile.subscribers, 20);
}

#[tokio::test]
async fn test_duplicate_concurrent_subscribes_count_once() {
    let server = TestServer::start().await.unwrap();
    let channel = register(&server).await;
    let fan = register(&server).await;

    let counts = join_all(
        (0..10).map(|_| subscribers(&server, &fan.token, &channel.id, "subscribe")),
    )
    .await;
    assert!(counts.iter().all(|c| *c == 1));
}

// ============================================================================
// Video Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_video() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let created = upload(&server, &owner.token).await;

    assert_eq!((created.likes, created.dislikes), (0, 0));
    assert_eq!(created.user.id, owner.id);

    let fetched: VideoResponse = assert_json(
        server.get(&format!("/api/videos/{}", created.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.video_url, created.video_url);

    let newer = upload(&server, &owner.token).await;
    let listed: Vec<VideoResponse> = assert_json(
        server
            .get(&format!("/api/videos/user/{}", owner.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let ids: Vec<&str> = listed.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec![newer.id.as_str(), created.id.as_str()]);
}

#[tokio::test]
async fn test_create_video_validation() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;

    let request = CreateVideoRequest {
        video_url: "not a url".to_string(),
        ..CreateVideoRequest::unique()
    };
    let response = server
        .post_auth("/api/videos", &owner.token, &request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/videos", &CreateVideoRequest::unique())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await.unwrap(), "UNAUTHORIZED");
}

async fn upload_titled(server: &TestServer, token: &str, title: &str, category: &str) -> VideoResponse {
    let request = CreateVideoRequest {
        title: title.to_string(),
        category: Some(category.to_string()),
        ..CreateVideoRequest::unique()
    };
    let response = server.post_auth("/api/videos", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn video_list(server: &TestServer, path: &str) -> Vec<String> {
    let videos: Vec<VideoResponse> =
        assert_json(server.get(path).await.unwrap(), StatusCode::OK).await.unwrap();
    videos.into_iter().map(|v| v.id).collect()
}

#[tokio::test]
async fn test_home_feed() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let song = upload_titled(&server, &owner.token, "Song", "music").await;
    let lesson = upload_titled(&server, &owner.token, "Lesson", "education").await;

    assert_eq!(video_list(&server, "/api/videos").await, vec![lesson.id.clone(), song.id.clone()]);
    assert_eq!(video_list(&server, "/api/videos?category=Music").await, vec![song.id]);
    assert_eq!(video_list(&server, "/api/videos?limit=1").await, vec![lesson.id]);

    let response = server.get("/api/videos?limit=0").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_videos() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let viewer = register(&server).await;
    let older = upload_titled(&server, &owner.token, "Borrow checker explained", "education").await;
    let newer = upload_titled(&server, &owner.token, "The BORROW checker in practice", "education").await;
    upload_titled(&server, &owner.token, "Cooking pasta", "food").await;
    react(&server, &viewer.token, &older.id, "like").await;

    assert_eq!(
        video_list(&server, "/api/videos/search?q=borrow&sort=date").await,
        vec![newer.id.clone(), older.id.clone()]
    );
    assert_eq!(
        video_list(&server, "/api/videos/search?q=borrow&sort=rating").await,
        vec![older.id, newer.id]
    );
    assert!(video_list(&server, "/api/videos/search?q=").await.is_empty());

    let response = server.get("/api/videos/search?q=x&sort=views").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await.unwrap(), "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_recommended_videos() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let watching = upload_titled(&server, &owner.token, "Now playing", "music").await;
    let same = upload_titled(&server, &owner.token, "Another song", "music").await;
    let other = upload_titled(&server, &owner.token, "Lesson", "education").await;

    assert_eq!(
        video_list(&server, &format!("/api/videos/{}/recommended", watching.id)).await,
        vec![same.id, other.id]
    );

    let response = server.get("/api/videos/12345/recommended").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_scenario() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let viewer = register(&server).await;
    let video = upload(&server, &owner.token).await;
    let path = format!("/api/videos/{}/comments", video.id);

    let request = CreateCommentRequest {
        content: "Great explanation".to_string(),
    };
    let response = server.post_auth(&path, &viewer.token, &request).await.unwrap();
    let posted: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.content, "Great explanation");
    assert_eq!(posted.user.username, viewer.username);
    assert!(!posted.created_at.is_empty());

    let reply = CreateCommentRequest {
        content: "Thanks!".to_string(),
    };
    let response = server.post_auth(&path, &owner.token, &reply).await.unwrap();
    let replied: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let listed: Vec<CommentResponse> =
        assert_json(server.get(&path).await.unwrap(), StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![replied.id.as_str(), posted.id.as_str()]);
}

#[tokio::test]
async fn test_comment_errors() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let video = upload(&server, &owner.token).await;
    let path = format!("/api/videos/{}/comments", video.id);

    let body = CreateCommentRequest {
        content: "hello".to_string(),
    };
    let response = server.post(&path, &body).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let blank = CreateCommentRequest {
        content: String::new(),
    };
    let response = server.post_auth(&path, &owner.token, &blank).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = server
        .post_auth("/api/videos/12345/comments", &owner.token, &body)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(response).await.unwrap(), "UNKNOWN_VIDEO");

    let response = server.get("/api/videos/12345/comments").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_scenario() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let u1 = register(&server).await;
    let v1 = upload(&server, &owner.token).await;
    let status_path = format!("/api/videos/{}/like-status", v1.id);

    assert_eq!(react(&server, &u1.token, &v1.id, "like").await, (1, 0));
    let status: LikeStatusResponse = assert_json(
        server.get_auth(&status_path, &u1.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(status, LikeStatusResponse { liked: true, disliked: false });

    assert_eq!(react(&server, &u1.token, &v1.id, "dislike").await, (0, 1));
    let status: LikeStatusResponse = assert_json(
        server.get_auth(&status_path, &u1.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(status, LikeStatusResponse { liked: false, disliked: true });

    assert_eq!(react(&server, &u1.token, &v1.id, "dislike").await, (0, 0));
    let status: LikeStatusResponse = assert_json(
        server.get_auth(&status_path, &u1.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(status, LikeStatusResponse { liked: false, disliked: false });
}

#[tokio::test]
async fn test_unknown_video_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let me = register(&server).await;

    for action in ["like", "dislike"] {
        let response = server
            .post_auth(&format!("/api/videos/987654321/{action}"), &me.token, &EmptyBody {})
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_code(response).await.unwrap(), "UNKNOWN_VIDEO");
    }

    let response = server
        .get_auth("/api/videos/987654321/like-status", &me.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get("/api/videos/987654321").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_reactions_match_edges() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let video = upload(&server, &owner.token).await;
    let mut viewers = Vec::new();
    for _ in 0..12 {
        viewers.push(register(&server).await);
    }

    join_all(viewers.iter().enumerate().map(|(i, viewer)| {
        let action = if i % 4 == 0 { "dislike" } else { "like" };
        react(&server, &viewer.token, &video.id, action)
    }))
    .await;

    let fetched: VideoResponse = assert_json(
        server.get(&format!("/api/videos/{}", video.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!((fetched.likes, fetched.dislikes), (9, 3));
}

// ============================================================================
// PostgreSQL Backend
// ============================================================================

#[tokio::test]
async fn test_postgres_backend_scenarios() {
    let Some(config) = postgres_test_config() else {
        return;
    };
    let server = TestServer::start_with_config(config).await.unwrap();

    let channel = register(&server).await;
    let viewer = register(&server).await;
    let video = upload(&server, &channel.token).await;

    assert_eq!(subscribers(&server, &viewer.token, &channel.id, "subscribe").await, 1);
    assert_eq!(subscribers(&server, &viewer.token, &channel.id, "subscribe").await, 1);
    assert_eq!(subscribers(&server, &viewer.token, &channel.id, "unsubscribe").await, 0);

    assert_eq!(react(&server, &viewer.token, &video.id, "like").await, (1, 0));
    assert_eq!(react(&server, &viewer.token, &video.id, "dislike").await, (0, 1));
    assert_eq!(react(&server, &viewer.token, &video.id, "dislike").await, (0, 0));

    let path = format!("/api/videos/{}/comments", video.id);
    let comment = CreateCommentRequest {
        content: "Stored in postgres".to_string(),
    };
    let response = server.post_auth(&path, &viewer.token, &comment).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let listed: Vec<CommentResponse> =
        assert_json(server.get(&path).await.unwrap(), StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user.id, viewer.id);

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
