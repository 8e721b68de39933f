// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, LikeCommentCommand},
    dto::{CommentDto, CommentWithAuthorDto},
    queries::comments::ListCommentsQuery,
};
use crate::domain::post::entity::LikeStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub message: String,
    pub comment: CommentDto,
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentWithAuthorDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLikeResponse {
    pub comment: CommentDto,
    pub like_status: LikeStatus,
}

#[derive(Debug, Serialize)]
pub struct CommentDeletedResponse {
    pub message: String,
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentCreatedResponse>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(
            &user,
            CreateCommentCommand {
                post_id,
                content: payload.content,
            },
        )
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            message: "comment created successfully".into(),
            comment,
        }),
    ))
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(post_id): Path<i64>,
) -> HttpResult<Json<CommentListResponse>> {
    let comments = state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { post_id })
        .await
        .into_http()?;

    Ok(Json(CommentListResponse { comments }))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(comment_id): Path<i64>,
) -> HttpResult<Json<CommentDeletedResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(Json(CommentDeletedResponse {
        message: "comment deleted successfully".into(),
    }))
}

pub async fn like_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(comment_id): Path<i64>,
) -> HttpResult<Json<CommentLikeResponse>> {
    let (comment, like_status) = state
        .services
        .comment_commands
        .toggle_like(&user, LikeCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(Json(CommentLikeResponse {
        comment,
        like_status,
    }))
}
