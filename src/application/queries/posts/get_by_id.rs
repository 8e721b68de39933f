use super::PostQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PostDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::post::entity::LikeStatus;
use crate::domain::post::value_objects::PostId;

pub struct GetPostQuery {
    pub id: i64,
}

impl PostQueryService {
    /// Single post with its author projection plus the viewer's like
    /// status, derived from likers-set membership.
    pub async fn get_post(
        &self,
        actor: &AuthenticatedUser,
        query: GetPostQuery,
    ) -> ApplicationResult<(PostDto, LikeStatus)> {
        let id = PostId::new(query.id)?;
        let listing = self
            .read_repo
            .find_listing(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let like_status = listing.post.like_status_for(actor.id);
        Ok((listing.into(), like_status))
    }
}
