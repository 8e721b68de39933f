// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, LikePostCommand, UpdatePostCommand,
    },
    dto::{Pagination, PostDto, PostPageDto},
    queries::posts::{GetPostQuery, SearchPostsQuery, UserPostsQuery},
};
use crate::domain::post::entity::LikeStatus;
use crate::domain::post::search::RawSearchParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: PostPageDto,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub post: PostDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub success: bool,
    pub post: PostDto,
    pub like_status: LikeStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostResponse {
    pub post: PostDto,
    pub like_status: LikeStatus,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

/// The caller's own posts use a flattened pagination shape; existing
/// consumers rely on it.
#[derive(Debug, Serialize)]
pub struct UserPostsResponse {
    pub posts: Vec<PostDto>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct UserPostsParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RawSearchParams>,
) -> HttpResult<Json<SearchResponse>> {
    let data = state
        .services
        .post_queries
        .search_posts(SearchPostsQuery { params })
        .await
        .into_http()?;

    Ok(Json(SearchResponse {
        success: true,
        data,
    }))
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<GetPostResponse>> {
    let (post, like_status) = state
        .services
        .post_queries
        .get_post(&user, GetPostQuery { id })
        .await
        .into_http()?;

    Ok(Json(GetPostResponse { post, like_status }))
}

pub async fn user_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<UserPostsParams>,
) -> HttpResult<Json<UserPostsResponse>> {
    let page = state
        .services
        .post_queries
        .user_posts(
            &user,
            UserPostsQuery {
                page: params.page,
                limit: params.limit,
            },
        )
        .await
        .into_http()?;

    Ok(Json(UserPostsResponse {
        posts: page.posts,
        pagination: page.pagination,
    }))
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostResponse>)> {
    let post = state
        .services
        .post_commands
        .create_post(
            &user,
            CreatePostCommand {
                title: payload.title,
                content: payload.content,
                image: payload.image,
                category_ids: payload.categories,
                tags: payload.tags,
            },
        )
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            success: true,
            post,
        }),
    ))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostResponse>> {
    let post = state
        .services
        .post_commands
        .update_post(
            &user,
            UpdatePostCommand {
                id,
                title: payload.title,
                content: payload.content,
                image: payload.image,
            },
        )
        .await
        .into_http()?;

    Ok(Json(PostResponse {
        success: true,
        post,
    }))
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse {
        success: true,
        message: "post deleted successfully".into(),
    }))
}

pub async fn like_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeResponse>> {
    let (post, like_status) = state
        .services
        .post_commands
        .toggle_like(&user, LikePostCommand { post_id: id })
        .await
        .into_http()?;

    Ok(Json(LikeResponse {
        success: true,
        post,
        like_status,
    }))
}
