pub mod entity;
pub mod value_objects;

pub use entity::Category;
pub use value_objects::CategoryId;
