// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
