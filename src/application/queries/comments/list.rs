use super::CommentQueryService;
use crate::application::{dto::CommentWithAuthorDto, error::ApplicationResult};
use crate::domain::post::value_objects::PostId;

pub struct ListCommentsQuery {
    pub post_id: i64,
}

impl CommentQueryService {
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentWithAuthorDto>> {
        let post_id = PostId::new(query.post_id)?;
        let comments = self.comment_repo.list_for_post(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
