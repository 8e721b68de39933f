use super::PostCommandService;
use crate::application::{
    dto::{AuthenticatedUser, PostDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::post::entity::PostUpdate;
use crate::domain::post::specifications::CanEditPostSpec;
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanEditPostSpec::new(&existing, actor.id, actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "not authorized to update this post",
            ));
        }

        let title = command.title.map(PostTitle::new).transpose()?;
        let content = command.content.map(PostContent::new).transpose()?;

        let updated = self
            .write_repo
            .update(PostUpdate {
                id,
                title,
                content,
                image: command.image,
                updated_at: self.clock.now(),
            })
            .await?;

        let listing = self
            .read_repo
            .find_listing(updated.id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("updated post vanished"))?;
        Ok(listing.into())
    }
}
