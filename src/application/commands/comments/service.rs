use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::comment::CommentRepository;
use crate::domain::post::{PostReadRepository, PostWriteRepository};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
    pub(super) post_write_repo: Arc<dyn PostWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            post_read_repo,
            post_write_repo,
            clock,
        }
    }
}
