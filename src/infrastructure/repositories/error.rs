use crate::domain::errors::DomainError;

const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_STATUS_CHECK: &str = "posts_status_chk";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    CNT_POST_STATUS_CHECK => {
                        DomainError::Validation("invalid post status".into())
                    }
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
