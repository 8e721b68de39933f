use super::CommentCommandService;
use crate::application::{
    dto::{AuthenticatedUser, CommentDto},
    error::ApplicationResult,
};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::post::entity::LikeStatus;

pub struct LikeCommentCommand {
    pub comment_id: i64,
}

impl CommentCommandService {
    /// Same atomic flip-and-recount contract as the post like toggle.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: LikeCommentCommand,
    ) -> ApplicationResult<(CommentDto, LikeStatus)> {
        let id = CommentId::new(command.comment_id)?;
        let comment = self.comment_repo.toggle_like(id, actor.id).await?;
        let like_status = comment.like_status_for(actor.id);
        Ok((comment.into(), like_status))
    }
}
