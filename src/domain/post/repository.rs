use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostListing, PostUpdate};
use crate::domain::post::search::SearchPipeline;
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Result of executing a search pipeline: the denormalized page plus
/// the total computed from the same filtered set in the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub posts: Vec<PostListing>,
    pub total: u64,
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Post joined with its author and category projections.
    async fn find_listing(&self, id: PostId) -> DomainResult<Option<PostListing>>;

    /// Execute the assembled pipeline in one round trip.
    async fn search_page(&self, pipeline: &SearchPipeline) -> DomainResult<SearchPage>;

    /// One author's posts, newest first, with the same one-pass total.
    async fn page_by_author(
        &self,
        author: UserId,
        skip: u64,
        limit: u64,
    ) -> DomainResult<SearchPage>;
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;

    /// Flip the user's membership in the likers set and recompute
    /// `like_count` from the set's new cardinality, as one atomic
    /// update. Concurrent togglers must never be able to observe or
    /// produce `like_count != likes.len()`.
    async fn toggle_like(&self, id: PostId, user: UserId) -> DomainResult<Post>;

    /// Append a comment id and bump `comments_count` by the new length
    /// of the comment set, not by one. Known drift, kept for wire
    /// compatibility; see the comment service docs.
    async fn attach_comment(&self, id: PostId, comment_id: i64) -> DomainResult<()>;
}
