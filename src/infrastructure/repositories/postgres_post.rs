// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::search::{Clause, Predicate, SearchPipeline, SortOrder, TextField};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostListing, PostReadRepository, PostStatus, PostTitle,
    PostUpdate, PostWriteRepository, SearchPage,
};
use crate::domain::user::{Author, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, content, image, author_id, category_ids, tags, status, \
     view_count, like_count, likes, comments_count, comment_ids, created_at, updated_at";

/// Listing projection: post columns plus the author projection and the
/// resolved category id/name pairs (two parallel arrays, both ordered
/// by category id, zipped back together in Rust).
const LISTING_SELECT: &str = "SELECT p.id, p.title, p.content, p.image, p.author_id, \
     p.category_ids, p.tags, p.status, p.view_count, p.like_count, p.likes, \
     p.comments_count, p.comment_ids, p.created_at, p.updated_at, \
     u.username AS author_username, u.first_name AS author_first_name, \
     u.last_name AS author_last_name, \
     ARRAY(SELECT c.id FROM categories c WHERE c.id = ANY(p.category_ids) ORDER BY c.id) AS resolved_category_ids, \
     ARRAY(SELECT c.name FROM categories c WHERE c.id = ANY(p.category_ids) ORDER BY c.id) AS resolved_category_names";

const LISTING_FROM: &str = " FROM posts p JOIN users u ON u.id = p.author_id";

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    image: Option<String>,
    author_id: i64,
    category_ids: Vec<i64>,
    tags: Vec<String>,
    status: String,
    view_count: i64,
    like_count: i64,
    likes: Vec<i64>,
    comments_count: i64,
    comment_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            image: row.image,
            author_id: UserId::new(row.author_id)?,
            category_ids: row
                .category_ids
                .into_iter()
                .map(CategoryId::new)
                .collect::<Result<_, _>>()?,
            tags: row.tags,
            status: PostStatus::parse(&row.status)?,
            view_count: row.view_count,
            like_count: row.like_count,
            likes: row
                .likes
                .into_iter()
                .map(UserId::new)
                .collect::<Result<_, _>>()?,
            comments_count: row.comments_count,
            comment_ids: row.comment_ids,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_username: String,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    resolved_category_ids: Vec<i64>,
    resolved_category_names: Vec<String>,
}

impl TryFrom<ListingRow> for PostListing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: UserId::new(row.post.author_id)?,
            username: row.author_username,
            first_name: row.author_first_name,
            last_name: row.author_last_name,
        };
        let categories = row
            .resolved_category_ids
            .into_iter()
            .zip(row.resolved_category_names)
            .map(|(id, name)| Ok(Category {
                id: CategoryId::new(id)?,
                name,
            }))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(PostListing {
            post: Post::try_from(row.post)?,
            author,
            categories,
        })
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    #[sqlx(flatten)]
    listing: ListingRow,
    total_count: i64,
}

/// Escape LIKE metacharacters and wrap in wildcards for a
/// case-insensitive substring match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn order_keyword(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

impl PostgresPostReadRepository {
    /// Render the author-join prefix and the match predicate into WHERE
    /// conditions. The join itself is always present in the listing
    /// select; the prefix only adds the name-match filter.
    fn apply_conditions(
        builder: &mut QueryBuilder<'_, Postgres>,
        author_term: Option<&str>,
        predicate: Option<&Predicate>,
    ) {
        let mut has_where = false;
        let mut separator = |builder: &mut QueryBuilder<'_, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(term) = author_term {
            let pattern = like_pattern(term);
            separator(builder);
            builder.push("(u.username ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR u.first_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR u.last_name ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        for clause in predicate.map(Predicate::clauses).unwrap_or_default() {
            separator(builder);
            match clause {
                Clause::Contains { field, term } => {
                    let pattern = like_pattern(term);
                    match field {
                        TextField::Title => {
                            builder.push("p.title ILIKE ");
                            builder.push_bind(pattern);
                        }
                        TextField::Content => {
                            builder.push("p.content ILIKE ");
                            builder.push_bind(pattern);
                        }
                        TextField::Tags => {
                            builder
                                .push("EXISTS (SELECT 1 FROM unnest(p.tags) AS tag WHERE tag ILIKE ");
                            builder.push_bind(pattern);
                            builder.push(")");
                        }
                    }
                }
                Clause::FullText { term } => {
                    builder.push("p.search @@ plainto_tsquery('simple', ");
                    builder.push_bind(term.clone());
                    builder.push(")");
                }
                Clause::CategoryEq(category) => {
                    builder.push_bind(i64::from(*category));
                    builder.push(" = ANY(p.category_ids)");
                }
                Clause::AuthorEq(author) => {
                    builder.push("p.author_id = ");
                    builder.push_bind(i64::from(*author));
                }
                Clause::StatusEq(status) => {
                    builder.push("p.status = ");
                    builder.push_bind(status.as_str());
                }
                Clause::CreatedAtGte(start) => {
                    builder.push("p.created_at >= ");
                    builder.push_bind(*start);
                }
                Clause::CreatedAtLte(end) => {
                    builder.push("p.created_at <= ");
                    builder.push_bind(*end);
                }
                Clause::LikeCountGte(min) => {
                    builder.push("p.like_count >= ");
                    builder.push_bind(*min);
                }
            }
        }
    }

    /// Total matches for the same conditions. Only used when the
    /// requested page lies past the end of the result set, where the
    /// windowed count comes back with no rows to carry it.
    async fn count_matching(
        &self,
        author_term: Option<&str>,
        predicate: Option<&Predicate>,
    ) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts p JOIN users u ON u.id = p.author_id");
        Self::apply_conditions(&mut builder, author_term, predicate);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(total as u64)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_listing(&self, id: PostId) -> DomainResult<Option<PostListing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "{LISTING_SELECT}{LISTING_FROM} WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PostListing::try_from).transpose()
    }

    async fn search_page(&self, pipeline: &SearchPipeline) -> DomainResult<SearchPage> {
        let author_term = pipeline.author_term();
        let predicate = pipeline.predicate();
        let (posts_view, _) = pipeline.facet();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        builder.push(", COUNT(*) OVER () AS total_count");
        builder.push(LISTING_FROM);
        Self::apply_conditions(&mut builder, author_term, predicate);

        let direction = order_keyword(posts_view.sort_order);
        builder.push(format!(
            " ORDER BY p.{} {direction}, p.id {direction}",
            posts_view.sort_by.column()
        ));
        builder.push(" LIMIT ");
        builder.push_bind(posts_view.limit as i64);
        builder.push(" OFFSET ");
        builder.push_bind(posts_view.skip as i64);

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = match rows.first() {
            Some(row) => row.total_count as u64,
            // A page past the end returns no rows to carry the window
            // count; re-count the same conditions.
            None if posts_view.skip > 0 => self.count_matching(author_term, predicate).await?,
            None => 0,
        };

        let posts = rows
            .into_iter()
            .map(|row| PostListing::try_from(row.listing))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchPage { posts, total })
    }

    async fn page_by_author(
        &self,
        author: UserId,
        skip: u64,
        limit: u64,
    ) -> DomainResult<SearchPage> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        builder.push(", COUNT(*) OVER () AS total_count");
        builder.push(LISTING_FROM);
        builder.push(" WHERE p.author_id = ");
        builder.push_bind(i64::from(author));
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(limit as i64);
        builder.push(" OFFSET ");
        builder.push_bind(skip as i64);

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = match rows.first() {
            Some(row) => row.total_count as u64,
            None if skip > 0 => {
                let count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
                        .bind(i64::from(author))
                        .fetch_one(&self.pool)
                        .await
                        .map_err(map_sqlx)?;
                count as u64
            }
            None => 0,
        };

        let posts = rows
            .into_iter()
            .map(|row| PostListing::try_from(row.listing))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchPage { posts, total })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            image,
            author_id,
            category_ids,
            tags,
            status,
            created_at,
            updated_at,
        } = post;

        let category_ids: Vec<i64> = category_ids.into_iter().map(i64::from).collect();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, content, image, author_id, category_ids, tags, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(image)
        .bind(i64::from(author_id))
        .bind(category_ids)
        .bind(tags)
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title);
        }

        if let Some(content) = content {
            let content: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content);
        }

        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {POST_COLUMNS}"));

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn toggle_like(&self, id: PostId, user: UserId) -> DomainResult<Post> {
        // Membership flip and recount in one statement: SET expressions
        // read the pre-update row, RETURNING reads the post-update row,
        // so like_count always equals cardinality(likes) even under
        // concurrent togglers.
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET
                 likes = CASE WHEN $2 = ANY(likes)
                     THEN array_remove(likes, $2)
                     ELSE array_append(likes, $2) END,
                 like_count = cardinality(CASE WHEN $2 = ANY(likes)
                     THEN array_remove(likes, $2)
                     ELSE array_append(likes, $2) END)
             WHERE id = $1
             RETURNING {POST_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(i64::from(user))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn attach_comment(&self, id: PostId, comment_id: i64) -> DomainResult<()> {
        // comments_count grows by the new set length, not by one:
        // known counter drift, kept for wire compatibility. See the
        // comment command service docs.
        let result = sqlx::query(
            "UPDATE posts SET
                 comments_count = comments_count + cardinality(comment_ids) + 1,
                 comment_ids = array_append(comment_ids, $2)
             WHERE id = $1",
        )
        .bind(i64::from(id))
        .bind(comment_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}
