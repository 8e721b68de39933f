use super::PostQueryService;
use crate::application::{
    dto::{AuthenticatedUser, Pagination, PostPageDto},
    error::{ApplicationError, ApplicationResult},
};

/// The caller's own posts. Unlike the search endpoint, page and limit
/// are required here; absent values are a 400, not a default.
pub struct UserPostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PostQueryService {
    pub async fn user_posts(
        &self,
        actor: &AuthenticatedUser,
        query: UserPostsQuery,
    ) -> ApplicationResult<PostPageDto> {
        let (Some(page), Some(limit)) = (query.page, query.limit) else {
            return Err(ApplicationError::validation(
                "please provide page and limit query parameters",
            ));
        };

        let page = page.parse::<u64>().ok().filter(|n| *n >= 1).unwrap_or(1);
        let limit = limit.parse::<u64>().ok().filter(|n| *n >= 1).unwrap_or(10);
        let skip = (page - 1) * limit;

        let result = self.read_repo.page_by_author(actor.id, skip, limit).await?;
        let pagination = Pagination::compute(page, limit, result.total);

        Ok(PostPageDto {
            posts: result.posts.into_iter().map(Into::into).collect(),
            pagination,
        })
    }
}
