// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use quill_core::domain::post::entity::{Post, PostListing};
use quill_core::domain::post::value_objects::{PostContent, PostId, PostStatus, PostTitle};
use quill_core::domain::user::{Author, UserId};

pub fn author(id: i64, username: &str) -> Author {
    Author {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        first_name: None,
        last_name: None,
    }
}

pub fn author_named(id: i64, username: &str, first: &str, last: &str) -> Author {
    Author {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        first_name: Some(first.into()),
        last_name: Some(last.into()),
    }
}

/// Deterministic timestamps for ordering assertions.
pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, n, 0, 0, 0).unwrap()
}

pub struct PostBuilder {
    id: i64,
    title: String,
    content: String,
    author: Author,
    tags: Vec<String>,
    likes: Vec<i64>,
    status: PostStatus,
    created_at: DateTime<Utc>,
}

impl PostBuilder {
    pub fn new(id: i64, title: &str, author: Author) -> Self {
        Self {
            id,
            title: title.into(),
            content: "Placeholder body".into(),
            author,
            tags: vec![],
            likes: vec![],
            status: PostStatus::Published,
            created_at: day(1),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn liked_by(mut self, user_id: i64) -> Self {
        self.likes.push(user_id);
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> PostListing {
        let likes: Vec<UserId> = self
            .likes
            .into_iter()
            .map(|id| UserId::new(id).unwrap())
            .collect();
        let post = Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            image: None,
            author_id: self.author.id,
            category_ids: vec![],
            tags: self.tags,
            status: self.status,
            view_count: 0,
            like_count: likes.len() as i64,
            likes,
            comments_count: 0,
            comment_ids: vec![],
            created_at: self.created_at,
            updated_at: self.created_at,
        };
        PostListing {
            post,
            author: self.author,
            categories: vec![],
        }
    }
}
