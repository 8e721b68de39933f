pub mod entity;
pub mod value_objects;

pub use entity::Author;
pub use value_objects::{Role, UserId};
