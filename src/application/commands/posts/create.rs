// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::application::{
    dto::{AuthenticatedUser, PostDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::category::CategoryId;
use crate::domain::post::entity::NewPost;
use crate::domain::post::value_objects::{PostContent, PostStatus, PostTitle};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category_ids: Vec<i64>,
    pub tags: Vec<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category_ids = command
            .category_ids
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewPost {
                title,
                content,
                image: command.image,
                author_id: actor.id,
                category_ids,
                tags: command.tags,
                status: PostStatus::Published,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // Echo the denormalized shape the client renders everywhere
        // else.
        let listing = self
            .read_repo
            .find_listing(created.id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("created post vanished"))?;
        Ok(listing.into())
    }
}
