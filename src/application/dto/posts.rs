// src/application/dto/posts.rs
use crate::application::dto::pagination::Pagination;
use crate::domain::category::Category;
use crate::domain::post::entity::PostListing;
use crate::domain::post::value_objects::PostStatus;
use crate::domain::user::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
        }
    }
}

/// Denormalized post as the listing pipeline returns it: author and
/// category projections inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub author: AuthorDto,
    pub categories: Vec<CategoryDto>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub view_count: i64,
    pub like_count: i64,
    pub likes: Vec<i64>,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostListing> for PostDto {
    fn from(listing: PostListing) -> Self {
        let PostListing {
            post,
            author,
            categories,
        } = listing;
        Self {
            id: post.id.into(),
            title: post.title.into(),
            content: post.content.into(),
            image: post.image,
            author: author.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            tags: post.tags,
            status: post.status,
            view_count: post.view_count,
            like_count: post.like_count,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments_count: post.comments_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of search results plus its metadata, computed from the same
/// filtered set in the same pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPageDto {
    pub posts: Vec<PostDto>,
    pub pagination: Pagination,
}
