use super::CommentCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::comment::value_objects::CommentId;

pub struct DeleteCommentCommand {
    pub comment_id: i64,
}

impl CommentCommandService {
    /// Comment deletion is author-only; unlike posts, admins get no
    /// override here.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(command.comment_id)?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if comment.author_id != actor.id {
            return Err(ApplicationError::forbidden(
                "you are not authorized to delete this comment",
            ));
        }

        self.comment_repo.delete(id).await?;
        Ok(())
    }
}
