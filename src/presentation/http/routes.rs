// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{comments, posts};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{delete, get, post},
};
use serde_json::json;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/posts/search", get(posts::search_posts))
        .route("/api/posts", post(posts::create_post))
        .route(
            "/api/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/posts/{id}/like", post(posts::like_post))
        .route("/api/user/posts", get(posts::user_posts))
        .route(
            "/api/{post_id}/comment",
            post(comments::create_comment).get(comments::list_comments),
        )
        .route(
            "/api/comment/{comment_id}",
            delete(comments::delete_comment),
        )
        .route(
            "/api/comment/{comment_id}/like",
            post(comments::like_comment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
