// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::application::{
    dto::{AuthenticatedUser, CommentDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::comment::entity::NewComment;
use crate::domain::comment::value_objects::CommentContent;
use crate::domain::post::value_objects::PostId;

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
}

impl CommentCommandService {
    /// Create a comment and attach it to its post.
    ///
    /// BUG (kept for wire compatibility): the post's `comments_count`
    /// is bumped by the *new length* of the comment-id set rather than
    /// by one, so the counter compounds after the first comment.
    /// Flagged rather than silently fixed; the divergence is pinned
    /// down in the integration tests so an integrator can decide.
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let content = CommentContent::new(command.content)?;

        self.post_read_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                post_id,
                author_id: actor.id,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        self.post_write_repo
            .attach_comment(post_id, comment.id.into())
            .await?;

        Ok(comment.into())
    }
}
