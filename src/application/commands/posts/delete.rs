use super::PostCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::post::specifications::CanDeletePostSpec;
use crate::domain::post::value_objects::PostId;

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanDeletePostSpec::new(&existing, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "not authorized to delete this post",
            ));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
