// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use crate::domain::user::{Role, UserId};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Identity headers set by the session gateway in front of this
/// service. Requests reach the core only after verification upstream;
/// the extractor just reads the resolved pair.
const USER_ID_HEADER: &str = "x-user-id";
const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn identity_from_parts(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Some(raw_id) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let unauthorized =
        |msg: &str| HttpError::from_error(ApplicationError::unauthorized(msg.to_string()));

    let id = raw_id
        .to_str()
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| unauthorized("malformed identity header"))?;
    let id = UserId::new(id).map_err(|_| unauthorized("malformed identity header"))?;

    let role = match parts.headers.get(USER_ROLE_HEADER) {
        Some(raw_role) => {
            let value = raw_role
                .to_str()
                .map_err(|_| unauthorized("malformed identity header"))?;
            Role::parse(value).map_err(|_| unauthorized("malformed identity header"))?
        }
        None => Role::User,
    };

    Ok(Some(AuthenticatedUser { id, role }))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match identity_from_parts(parts)? {
            Some(user) => Ok(Self(user)),
            None => Err(HttpError::from_error(ApplicationError::unauthorized(
                "authentication required",
            ))),
        }
    }
}
