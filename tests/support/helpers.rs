// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::Request;
use serde_json::Value;

use quill_core::application::dto::AuthenticatedUser;
use quill_core::application::services::ApplicationServices;
use quill_core::domain::comment::CommentRepository;
use quill_core::domain::post::{PostReadRepository, PostWriteRepository};
use quill_core::domain::user::{Role, UserId};
use quill_core::infrastructure::time::SystemClock;
use quill_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{PostBuilder, author_named, day};
use super::mocks::InMemoryBlog;

/// Three posts by two authors, the fixture every search scenario runs
/// against:
///   1. "Intro to Rust"  by alice, oldest
///   2. "Go Basics"      by bob
///   3. "Rust Patterns"  by bob, newest
pub fn seeded_blog() -> Arc<InMemoryBlog> {
    let blog = Arc::new(InMemoryBlog::new());
    let alice = author_named(1, "alice", "Alice", "Anders");
    let bob = author_named(2, "bob", "Bob", "Brandt");
    blog.add_author(alice.clone());
    blog.add_author(bob.clone());

    blog.seed_post(
        PostBuilder::new(1, "Intro to Rust", alice)
            .content("Learning the borrow checker")
            .tag("rust")
            .liked_by(2)
            .created_at(day(1))
            .build(),
    );
    blog.seed_post(
        PostBuilder::new(2, "Go Basics", bob.clone())
            .content("Goroutines and channels")
            .tag("go")
            .created_at(day(2))
            .build(),
    );
    blog.seed_post(
        PostBuilder::new(3, "Rust Patterns", bob)
            .content("Builder and typestate patterns")
            .tag("rust")
            .tag("patterns")
            .liked_by(1)
            .liked_by(2)
            .created_at(day(3))
            .build(),
    );
    blog
}

pub fn build_services(blog: &Arc<InMemoryBlog>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::clone(blog) as Arc<dyn PostReadRepository>,
        Arc::clone(blog) as Arc<dyn PostWriteRepository>,
        Arc::clone(blog) as Arc<dyn CommentRepository>,
        Arc::new(SystemClock),
    ))
}

pub fn make_test_router(blog: &Arc<InMemoryBlog>) -> axum::Router {
    let state = HttpState {
        services: build_services(blog),
    };
    build_router(state)
}

pub fn user(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        role: Role::User,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Request carrying the gateway identity headers.
pub fn authed(method: &str, uri: &str, user_id: i64) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id.to_string())
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}
