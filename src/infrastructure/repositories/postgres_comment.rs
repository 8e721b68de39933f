// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRepository, CommentWithAuthor, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COMMENT_COLUMNS: &str = "id, post_id, author_id, content, like_count, likes, created_at";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    content: String,
    like_count: i64,
    likes: Vec<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author_id: UserId::new(row.author_id)?,
            content: CommentContent::new(row.content)?,
            like_count: row.like_count,
            likes: row
                .likes
                .into_iter()
                .map(UserId::new)
                .collect::<Result<_, _>>()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentWithAuthorRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    author_username: String,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            author_id,
            content,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (post_id, author_id, content, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(post_id))
        .bind(i64::from(author_id))
        .bind(content.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_post(&self, post_id: PostId) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorRow>(
            "SELECT m.id, m.post_id, m.author_id, m.content, m.like_count, m.likes, m.created_at,
                    u.username AS author_username
             FROM comments m JOIN users u ON u.id = m.author_id
             WHERE m.post_id = $1
             ORDER BY m.created_at, m.id",
        )
        .bind(i64::from(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CommentWithAuthor {
                    comment: Comment::try_from(row.comment)?,
                    author_username: row.author_username,
                })
            })
            .collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn toggle_like(&self, id: CommentId, user: UserId) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET
                 likes = CASE WHEN $2 = ANY(likes)
                     THEN array_remove(likes, $2)
                     ELSE array_append(likes, $2) END,
                 like_count = cardinality(CASE WHEN $2 = ANY(likes)
                     THEN array_remove(likes, $2)
                     ELSE array_append(likes, $2) END)
             WHERE id = $1
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(i64::from(user))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }
}
