mod create;
mod delete;
mod like;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use like::LikeCommentCommand;
pub use service::CommentCommandService;
