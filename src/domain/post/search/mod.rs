pub mod filters;
pub mod predicate;
pub mod pipeline;

pub use filters::{RawSearchParams, SearchField, SearchFilters, SortKey, SortOrder};
pub use predicate::{BuiltQuery, Clause, Predicate, SearchMode, TextField};
pub use pipeline::{PaginationView, PipelineStage, PostsView, SearchPipeline};
