// src/domain/post/search/pipeline.rs
use crate::domain::post::search::filters::{SearchFilters, SortKey, SortOrder};
use crate::domain::post::search::predicate::{BuiltQuery, Predicate};

/// The page slice of the facet: sort, skip, take, then denormalize with
/// the author and category joins.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsView {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub skip: u64,
    pub limit: u64,
}

/// The totals side of the facet: count the filtered set and echo the
/// requested page so metadata can be derived from the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u64,
    pub limit: u64,
}

/// One step of the read pipeline, executed server-side in one round
/// trip.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineStage {
    /// Join posts to their author and keep rows whose author username,
    /// first name, or last name case-insensitively contains the term.
    /// Only present when the search targets the author field.
    AuthorSearch { term: String },
    /// Apply the structural predicate to the (possibly join-filtered)
    /// set.
    Match(Predicate),
    /// Fan out into the page slice and the totals without re-scanning
    /// the filtered set.
    Facet {
        posts: PostsView,
        pagination: PaginationView,
    },
}

/// Ordered stages for one listing request. The facet guarantee: the
/// total count and the page slice are computed from the same filtered
/// set in the same logical pass, so pagination metadata can never race
/// against the returned page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPipeline {
    stages: Vec<PipelineStage>,
}

impl SearchPipeline {
    /// Assemble the stage list for a built query.
    ///
    /// The match stage is skipped when the predicate is empty; the
    /// author-join prefix is emitted only when the builder signalled an
    /// author-scoped search.
    pub fn assemble(query: BuiltQuery, filters: &SearchFilters) -> Self {
        let mut stages = Vec::with_capacity(3);

        if let Some(term) = query.author_term {
            stages.push(PipelineStage::AuthorSearch { term });
        }

        if !query.predicate.is_empty() {
            stages.push(PipelineStage::Match(query.predicate));
        }

        stages.push(PipelineStage::Facet {
            posts: PostsView {
                sort_by: filters.sort_by,
                sort_order: filters.sort_order,
                skip: filters.skip(),
                limit: filters.limit,
            },
            pagination: PaginationView {
                page: filters.page,
                limit: filters.limit,
            },
        });

        Self { stages }
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn author_term(&self) -> Option<&str> {
        self.stages.iter().find_map(|stage| match stage {
            PipelineStage::AuthorSearch { term } => Some(term.as_str()),
            _ => None,
        })
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.stages.iter().find_map(|stage| match stage {
            PipelineStage::Match(predicate) => Some(predicate),
            _ => None,
        })
    }

    /// Every pipeline ends in exactly one facet stage.
    pub fn facet(&self) -> (&PostsView, &PaginationView) {
        self.stages
            .iter()
            .find_map(|stage| match stage {
                PipelineStage::Facet { posts, pagination } => Some((posts, pagination)),
                _ => None,
            })
            .expect("pipeline always carries a facet stage")
    }
}
