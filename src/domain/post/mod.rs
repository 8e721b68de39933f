pub mod entity;
pub mod repository;
pub mod search;
pub mod specifications;
pub mod value_objects;

pub use entity::{LikeStatus, NewPost, Post, PostListing, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository, SearchPage};
pub use value_objects::{PostContent, PostId, PostStatus, PostTitle};
