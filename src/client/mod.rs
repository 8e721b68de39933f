pub mod optimistic;

pub use optimistic::{LikeFlow, PostTransport, PostView, PostViewCache};
