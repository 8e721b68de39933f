// src/domain/post/search/filters.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostStatus;
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

/// Raw query-string parameters exactly as they arrive: every field a
/// string or absent. Coercion and validation happen in
/// [`SearchFilters::normalize`], never in the deserializer, so a bad
/// value produces a field-level error instead of a serde rejection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSearchParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub search_field: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_likes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
    Author,
    Tags,
}

impl SearchField {
    pub const ALLOWED: &'static str = "title, content, author, tags";

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "author" => Ok(Self::Author),
            "tags" => Ok(Self::Tags),
            _ => Err(invalid_enum("searchField", Self::ALLOWED)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const ALLOWED: &'static str = "asc, desc";

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(invalid_enum("sortOrder", Self::ALLOWED)),
        }
    }
}

/// Whitelisted sort keys. The raw `sortBy` string is never
/// interpolated into the sort stage; a fixed enum keeps the dynamic
/// SQL safe and turns typos into 400s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    LikeCount,
    ViewCount,
    CommentsCount,
}

impl SortKey {
    pub const ALLOWED: &'static str =
        "createdAt, updatedAt, title, likeCount, viewCount, commentsCount";

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "likeCount" => Ok(Self::LikeCount),
            "viewCount" => Ok(Self::ViewCount),
            "commentsCount" => Ok(Self::CommentsCount),
            _ => Err(invalid_enum("sortBy", Self::ALLOWED)),
        }
    }

    /// Storage column backing this key.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::LikeCount => "like_count",
            Self::ViewCount => "view_count",
            Self::CommentsCount => "comments_count",
        }
    }
}

/// One normalized listing request: every optional field defaulted,
/// every enum validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub search_field: Option<SearchField>,
    pub category: Option<CategoryId>,
    pub author: Option<UserId>,
    pub status: Option<PostStatus>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub min_likes: Option<i64>,
    pub page: u64,
    pub limit: u64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            search: None,
            search_field: None,
            category: None,
            author: None,
            status: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            start_date: None,
            end_date: None,
            min_likes: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchFilters {
    /// Coerce and validate raw query parameters.
    ///
    /// Numeric page/limit parse base-10 and fall back to their defaults
    /// when absent, non-numeric, or non-positive. Enum fields reject
    /// out-of-enum values with the offending field name and the allowed
    /// set. Date bounds must parse; start ≤ end is not enforced.
    pub fn normalize(raw: RawSearchParams) -> DomainResult<Self> {
        let page = parse_or_default(raw.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_or_default(raw.limit.as_deref(), DEFAULT_LIMIT).min(MAX_LIMIT);

        let search = raw
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let search_field = raw
            .search_field
            .as_deref()
            .map(SearchField::parse)
            .transpose()?;

        let category = raw
            .category
            .as_deref()
            .map(|v| parse_id(v, "category").and_then(CategoryId::new))
            .transpose()?;

        let author = raw
            .author
            .as_deref()
            .map(|v| parse_id(v, "author").and_then(UserId::new))
            .transpose()?;

        let status = raw.status.as_deref().map(PostStatus::parse).transpose()?;

        let sort_by = match raw.sort_by.as_deref() {
            Some(value) => SortKey::parse(value)?,
            None => SortKey::default(),
        };

        let sort_order = match raw.sort_order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::default(),
        };

        let start_date = raw
            .start_date
            .as_deref()
            .map(|v| parse_timestamp(v, "startDate"))
            .transpose()?;
        let end_date = raw
            .end_date
            .as_deref()
            .map(|v| parse_timestamp(v, "endDate"))
            .transpose()?;

        let min_likes = raw
            .min_likes
            .as_deref()
            .map(|v| {
                v.parse::<i64>()
                    .ok()
                    .filter(|n| *n >= 0)
                    .ok_or_else(|| {
                        DomainError::Validation(
                            "minLikes must be a non-negative integer".into(),
                        )
                    })
            })
            .transpose()?;

        Ok(Self {
            search,
            search_field,
            category,
            author,
            status,
            sort_by,
            sort_order,
            start_date,
            end_date,
            min_likes,
            page,
            limit,
        })
    }

    /// Offset of the first row of the requested page.
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

fn invalid_enum(field: &str, allowed: &str) -> DomainError {
    DomainError::Validation(format!("{field} must be one of: {allowed}"))
}

fn parse_or_default(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

fn parse_id(value: &str, field: &str) -> DomainResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| DomainError::Validation(format!("{field} must be a numeric id")))
}

fn parse_timestamp(value: &str, field: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(DomainError::Validation(format!(
        "{field} must be a parseable timestamp"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawSearchParams {
        let mut params = RawSearchParams::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "page" => params.page = value,
                "limit" => params.limit = value,
                "search" => params.search = value,
                "searchField" => params.search_field = value,
                "category" => params.category = value,
                "author" => params.author = value,
                "status" => params.status = value,
                "sortBy" => params.sort_by = value,
                "sortOrder" => params.sort_order = value,
                "startDate" => params.start_date = value,
                "endDate" => params.end_date = value,
                "minLikes" => params.min_likes = value,
                other => panic!("unknown param {other}"),
            }
        }
        params
    }

    #[test]
    fn defaults_apply_when_everything_is_absent() {
        let filters = SearchFilters::normalize(RawSearchParams::default()).unwrap();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);
        assert_eq!(filters.sort_by, SortKey::CreatedAt);
        assert_eq!(filters.sort_order, SortOrder::Desc);
        assert!(filters.search.is_none());
    }

    #[test]
    fn non_numeric_page_and_limit_fall_back_to_defaults() {
        let filters =
            SearchFilters::normalize(raw(&[("page", "abc"), ("limit", "-3")])).unwrap();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);
    }

    #[test]
    fn limit_is_capped() {
        let filters = SearchFilters::normalize(raw(&[("limit", "5000")])).unwrap();
        assert_eq!(filters.limit, 100);
    }

    #[test]
    fn blank_search_is_treated_as_absent() {
        let filters = SearchFilters::normalize(raw(&[("search", "   ")])).unwrap();
        assert!(filters.search.is_none());
    }

    #[test]
    fn out_of_enum_search_field_is_rejected_with_detail() {
        let err = SearchFilters::normalize(raw(&[("searchField", "body")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("searchField"), "{message}");
        assert!(message.contains("title, content, author, tags"), "{message}");
    }

    #[test]
    fn out_of_enum_sort_order_and_status_are_rejected() {
        assert!(SearchFilters::normalize(raw(&[("sortOrder", "up")])).is_err());
        assert!(SearchFilters::normalize(raw(&[("status", "deleted")])).is_err());
        assert!(SearchFilters::normalize(raw(&[("sortBy", "rating")])).is_err());
    }

    #[test]
    fn dates_accept_rfc3339_and_plain_dates() {
        let filters = SearchFilters::normalize(raw(&[
            ("startDate", "2024-01-15"),
            ("endDate", "2024-02-01T12:30:00Z"),
        ]))
        .unwrap();
        assert!(filters.start_date.is_some());
        assert!(filters.end_date.is_some());

        let err = SearchFilters::normalize(raw(&[("startDate", "yesterday")])).unwrap_err();
        assert!(err.to_string().contains("startDate"));
    }

    #[test]
    fn skip_is_page_minus_one_times_limit() {
        let filters =
            SearchFilters::normalize(raw(&[("page", "3"), ("limit", "25")])).unwrap();
        assert_eq!(filters.skip(), 50);
    }
}
