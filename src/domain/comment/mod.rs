pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentWithAuthor, NewComment};
pub use repository::CommentRepository;
pub use value_objects::{CommentContent, CommentId};
