// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, posts::PostCommandService},
        ports::time::Clock,
        queries::{comments::CommentQueryService, posts::PostQueryService},
    },
    domain::{
        comment::CommentRepository,
        post::{PostReadRepository, PostWriteRepository},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_read_repo: Arc<dyn PostReadRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&post_write_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        Self {
            post_commands,
            post_queries,
            comment_commands,
            comment_queries,
        }
    }
}
