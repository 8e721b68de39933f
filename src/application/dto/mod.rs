pub mod auth;
pub mod comments;
pub mod pagination;
pub mod posts;

pub use auth::AuthenticatedUser;
pub use comments::{CommentDto, CommentWithAuthorDto};
pub use pagination::Pagination;
pub use posts::{AuthorDto, CategoryDto, PostDto, PostPageDto};
