// src/application/queries/posts/search.rs
use super::PostQueryService;
use crate::application::{
    dto::{Pagination, PostPageDto},
    error::ApplicationResult,
};
use crate::domain::post::search::{BuiltQuery, RawSearchParams, SearchFilters, SearchPipeline};

pub struct SearchPostsQuery {
    pub params: RawSearchParams,
}

impl PostQueryService {
    /// The listing pipeline: normalize → build predicate → assemble
    /// stages → execute in one round trip → shape the page.
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<PostPageDto> {
        let filters = SearchFilters::normalize(query.params)?;
        let built = BuiltQuery::build(&filters);
        let pipeline = SearchPipeline::assemble(built, &filters);

        tracing::debug!(
            page = filters.page,
            limit = filters.limit,
            stages = pipeline.stages().len(),
            "executing post search pipeline"
        );

        let page = self.read_repo.search_page(&pipeline).await?;
        let pagination = Pagination::compute(filters.page, filters.limit, page.total);

        Ok(PostPageDto {
            posts: page.posts.into_iter().map(Into::into).collect(),
            pagination,
        })
    }
}
