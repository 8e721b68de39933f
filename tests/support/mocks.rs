// tests/support/mocks.rs
// In-memory store standing in for Postgres. The read side interprets
// search pipelines the same way the SQL translation does: author-join
// filter first, then predicate clauses, then one facet pass that sorts,
// counts, and slices the same filtered set.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use quill_core::domain::comment::{
    Comment, CommentId, CommentRepository, CommentWithAuthor, NewComment,
};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::post::search::{Clause, SearchPipeline, SortKey, SortOrder, TextField};
use quill_core::domain::post::{
    NewPost, Post, PostId, PostListing, PostReadRepository, PostUpdate, PostWriteRepository,
    SearchPage,
};
use quill_core::domain::user::{Author, UserId};

pub struct InMemoryBlog {
    state: Mutex<BlogState>,
}

struct BlogState {
    authors: HashMap<i64, Author>,
    posts: Vec<PostListing>,
    comments: Vec<Comment>,
    next_post_id: i64,
    next_comment_id: i64,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BlogState {
                authors: HashMap::new(),
                posts: Vec::new(),
                comments: Vec::new(),
                next_post_id: 1,
                next_comment_id: 1,
            }),
        }
    }

    pub fn add_author(&self, author: Author) {
        let mut state = self.state.lock().unwrap();
        state.authors.insert(author.id.into(), author);
    }

    pub fn seed_post(&self, listing: PostListing) {
        let mut state = self.state.lock().unwrap();
        let id: i64 = listing.post.id.into();
        state.next_post_id = state.next_post_id.max(id + 1);
        state.posts.push(listing);
    }

    /// Current stored post, for direct assertions on counters.
    pub fn stored_post(&self, id: i64) -> Option<Post> {
        let state = self.state.lock().unwrap();
        state
            .posts
            .iter()
            .find(|row| i64::from(row.post.id) == id)
            .map(|row| row.post.clone())
    }
}

impl Default for InMemoryBlog {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn clause_matches(clause: &Clause, post: &Post) -> bool {
    match clause {
        Clause::Contains { field, term } => match field {
            TextField::Title => contains_ci(post.title.as_str(), term),
            TextField::Content => contains_ci(post.content.as_str(), term),
            TextField::Tags => post.tags.iter().any(|tag| contains_ci(tag, term)),
        },
        Clause::FullText { term } => {
            contains_ci(post.title.as_str(), term)
                || contains_ci(post.content.as_str(), term)
                || post.tags.iter().any(|tag| contains_ci(tag, term))
        }
        Clause::CategoryEq(id) => post.category_ids.contains(id),
        Clause::AuthorEq(id) => post.author_id == *id,
        Clause::StatusEq(status) => post.status == *status,
        Clause::CreatedAtGte(ts) => post.created_at >= *ts,
        Clause::CreatedAtLte(ts) => post.created_at <= *ts,
        Clause::LikeCountGte(n) => post.like_count >= *n,
    }
}

fn sort_rows(rows: &mut [PostListing], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::CreatedAt => a.post.created_at.cmp(&b.post.created_at),
            SortKey::UpdatedAt => a.post.updated_at.cmp(&b.post.updated_at),
            SortKey::Title => a.post.title.as_str().cmp(b.post.title.as_str()),
            SortKey::LikeCount => a.post.like_count.cmp(&b.post.like_count),
            SortKey::ViewCount => a.post.view_count.cmp(&b.post.view_count),
            SortKey::CommentsCount => a.post.comments_count.cmp(&b.post.comments_count),
        }
        // id tie-break follows the sort direction, matching the store.
        .then(i64::from(a.post.id).cmp(&i64::from(b.post.id)));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn toggle_membership(likes: &mut Vec<UserId>, user: UserId) {
    if let Some(pos) = likes.iter().position(|liker| *liker == user) {
        likes.remove(pos);
    } else {
        likes.push(user);
    }
}

#[async_trait]
impl PostReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .find(|row| row.post.id == id)
            .map(|row| row.post.clone()))
    }

    async fn find_listing(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|row| row.post.id == id).cloned())
    }

    async fn search_page(&self, pipeline: &SearchPipeline) -> DomainResult<SearchPage> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<PostListing> = state.posts.clone();

        if let Some(term) = pipeline.author_term() {
            rows.retain(|row| row.author.matches_term(term));
        }
        if let Some(predicate) = pipeline.predicate() {
            rows.retain(|row| {
                predicate
                    .clauses()
                    .iter()
                    .all(|clause| clause_matches(clause, &row.post))
            });
        }

        let (posts_view, _) = pipeline.facet();
        sort_rows(&mut rows, posts_view.sort_by, posts_view.sort_order);

        // Total and slice come from the same filtered vector: the facet
        // contract.
        let total = rows.len() as u64;
        let posts = rows
            .into_iter()
            .skip(posts_view.skip as usize)
            .take(posts_view.limit as usize)
            .collect();

        Ok(SearchPage { posts, total })
    }

    async fn page_by_author(
        &self,
        author: UserId,
        skip: u64,
        limit: u64,
    ) -> DomainResult<SearchPage> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<PostListing> = state
            .posts
            .iter()
            .filter(|row| row.post.author_id == author)
            .cloned()
            .collect();
        sort_rows(&mut rows, SortKey::CreatedAt, SortOrder::Desc);

        let total = rows.len() as u64;
        let posts = rows
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        Ok(SearchPage { posts, total })
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryBlog {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        let author = state
            .authors
            .get(&i64::from(post.author_id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        let id = state.next_post_id;
        state.next_post_id += 1;

        let stored = Post {
            id: PostId::new(id)?,
            title: post.title,
            content: post.content,
            image: post.image,
            author_id: post.author_id,
            category_ids: post.category_ids,
            tags: post.tags,
            status: post.status,
            view_count: 0,
            like_count: 0,
            likes: vec![],
            comments_count: 0,
            comment_ids: vec![],
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.push(PostListing {
            post: stored.clone(),
            author,
            categories: vec![],
        });
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .posts
            .iter_mut()
            .find(|row| row.post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            row.post.title = title;
        }
        if let Some(content) = update.content {
            row.post.content = content;
        }
        if let Some(image) = update.image {
            row.post.image = Some(image);
        }
        row.post.updated_at = update.updated_at;
        Ok(row.post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|row| row.post.id != id);
        Ok(())
    }

    async fn toggle_like(&self, id: PostId, user: UserId) -> DomainResult<Post> {
        // One critical section for the flip and the recount, mirroring
        // the single-statement store update.
        let mut state = self.state.lock().unwrap();
        let row = state
            .posts
            .iter_mut()
            .find(|row| row.post.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        toggle_membership(&mut row.post.likes, user);
        row.post.like_count = row.post.likes.len() as i64;
        Ok(row.post.clone())
    }

    async fn attach_comment(&self, id: PostId, comment_id: i64) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .posts
            .iter_mut()
            .find(|row| row.post.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        // Counter bumps by the pre-append set length plus one, same as
        // the production query.
        row.post.comments_count += row.post.comment_ids.len() as i64 + 1;
        row.post.comment_ids.push(comment_id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_comment_id;
        state.next_comment_id += 1;

        let stored = Comment {
            id: CommentId::new(id)?,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            like_count: 0,
            likes: vec![],
            created_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentWithAuthor>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author_username = state
                    .authors
                    .get(&i64::from(comment.author_id))
                    .map(|author| author.username.clone())
                    .unwrap_or_else(|| "unknown".into());
                CommentWithAuthor {
                    comment,
                    author_username,
                }
            })
            .collect())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.comments.retain(|comment| comment.id != id);
        Ok(())
    }

    async fn toggle_like(&self, id: CommentId, user: UserId) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let comment = state
            .comments
            .iter_mut()
            .find(|comment| comment.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        toggle_membership(&mut comment.likes, user);
        comment.like_count = comment.likes.len() as i64;
        Ok(comment.clone())
    }
}
