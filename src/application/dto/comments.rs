use crate::domain::comment::entity::{Comment, CommentWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author_id: comment.author_id.into(),
            content: comment.content.into(),
            like_count: comment.like_count,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthorDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub author_username: String,
}

impl From<CommentWithAuthor> for CommentWithAuthorDto {
    fn from(value: CommentWithAuthor) -> Self {
        Self {
            comment: value.comment.into(),
            author_username: value.author_username,
        }
    }
}
