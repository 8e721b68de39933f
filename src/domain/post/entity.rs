// src/domain/post/entity.rs
use crate::domain::category::{Category, CategoryId};
use crate::domain::post::value_objects::{PostContent, PostId, PostStatus, PostTitle};
use crate::domain::user::{Author, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub image: Option<String>,
    pub author_id: UserId,
    pub category_ids: Vec<CategoryId>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub view_count: i64,
    pub like_count: i64,
    /// Ordered set of liker ids; a user appears at most once.
    pub likes: Vec<UserId>,
    pub comments_count: i64,
    pub comment_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }

    pub fn like_status_for(&self, user: UserId) -> LikeStatus {
        if self.liked_by(user) {
            LikeStatus::Liked
        } else {
            LikeStatus::Unliked
        }
    }

    /// Invariant: `like_count` always equals the cardinality of the
    /// likers set. Repositories must uphold this inside a single atomic
    /// update; this helper exists for assertions.
    pub fn likes_consistent(&self) -> bool {
        self.like_count == self.likes.len() as i64
    }
}

pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub image: Option<String>,
    pub author_id: UserId,
    pub category_ids: Vec<CategoryId>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized read model: a post joined with its author projection and
/// category names, as returned by the listing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListing {
    pub post: Post,
    pub author: Author,
    pub categories: Vec<Category>,
}

/// Whether the viewing user's id is currently a member of the post's
/// likers set. Not stored separately from `Post::likes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}

impl LikeStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Liked => Self::Unliked,
            Self::Unliked => Self::Liked,
        }
    }
}
