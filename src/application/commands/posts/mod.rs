mod create;
mod delete;
mod like;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use like::LikePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
