use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::post::entity::LikeStatus;
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub like_count: i64,
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn like_status_for(&self, user: UserId) -> LikeStatus {
        if self.likes.contains(&user) {
            LikeStatus::Liked
        } else {
            LikeStatus::Unliked
        }
    }
}

pub struct NewComment {
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with the author's username, as returned by the
/// comment listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}
