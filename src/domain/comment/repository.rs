use crate::domain::comment::entity::{Comment, CommentWithAuthor, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// All comments for a post, oldest first, with the author username
    /// projection.
    async fn list_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentWithAuthor>>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;

    /// Same atomic membership-flip-and-recount contract as the post
    /// like toggle.
    async fn toggle_like(&self, id: CommentId, user: UserId) -> DomainResult<Comment>;
}
