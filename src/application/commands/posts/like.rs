// src/application/commands/posts/like.rs
use super::PostCommandService;
use crate::application::{
    dto::{AuthenticatedUser, PostDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::post::entity::LikeStatus;
use crate::domain::post::value_objects::PostId;

pub struct LikePostCommand {
    pub post_id: i64,
}

impl PostCommandService {
    /// Two-state toggle on (post, user): absent → add and report
    /// `liked`, present → remove and report `unliked`. The membership
    /// flip and the `like_count` recount happen in one atomic store
    /// update, so interleaved togglers cannot drift the counter away
    /// from the set cardinality.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: LikePostCommand,
    ) -> ApplicationResult<(PostDto, LikeStatus)> {
        let id = PostId::new(command.post_id)?;

        let post = self.write_repo.toggle_like(id, actor.id).await?;
        debug_assert!(post.likes_consistent());
        let like_status = post.like_status_for(actor.id);

        tracing::debug!(
            post_id = %id,
            user_id = %actor.id,
            status = ?like_status,
            "like toggled"
        );

        // Re-read the denormalized shape, matching what the client
        // caches for this post.
        let listing = self
            .read_repo
            .find_listing(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok((listing.into(), like_status))
    }
}
