mod get_by_id;
mod search;
mod service;
mod user_posts;

pub use get_by_id::GetPostQuery;
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
pub use user_posts::UserPostsQuery;
