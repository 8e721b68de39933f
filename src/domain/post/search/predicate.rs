// src/domain/post/search/predicate.rs
use crate::domain::category::CategoryId;
use crate::domain::post::search::filters::{SearchField, SearchFilters};
use crate::domain::post::value_objects::PostStatus;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Closed union over the field-dependent search behaviours. Dispatching
/// once here keeps the join-requiring author case structurally distinct
/// from the single-field and full-text cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// No search term: the predicate matches everything, subject to the
    /// other filters.
    Unscoped,
    /// Term present, no field: full-text index across searchable fields.
    FullText(String),
    ByTitle(String),
    ByContent(String),
    ByTags(String),
    /// Term present, field = author. Author identity lives in a
    /// separate collection, so this cannot become a predicate clause;
    /// it requires a join-then-filter prefix in the pipeline.
    ByAuthor(String),
}

impl SearchMode {
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let Some(term) = filters.search.clone() else {
            return Self::Unscoped;
        };
        match filters.search_field {
            None => Self::FullText(term),
            Some(SearchField::Title) => Self::ByTitle(term),
            Some(SearchField::Content) => Self::ByContent(term),
            Some(SearchField::Tags) => Self::ByTags(term),
            Some(SearchField::Author) => Self::ByAuthor(term),
        }
    }
}

/// Post fields addressable by a case-insensitive substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Content,
    Tags,
}

/// One boolean condition over a stored post.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Case-insensitive substring match on a single text field.
    Contains { field: TextField, term: String },
    /// Full-text match across the indexed searchable fields.
    FullText { term: String },
    CategoryEq(CategoryId),
    AuthorEq(UserId),
    StatusEq(PostStatus),
    CreatedAtGte(DateTime<Utc>),
    CreatedAtLte(DateTime<Utc>),
    LikeCountGte(i64),
}

/// Structural filter expression: the conjunction of its clauses. An
/// empty predicate matches every post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }
}

/// Output of the predicate builder: the store predicate plus, when the
/// search targets the author, the term the pipeline assembler must turn
/// into an author-join prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub predicate: Predicate,
    pub author_term: Option<String>,
}

impl BuiltQuery {
    /// Convert normalized filters into a predicate.
    pub fn build(filters: &SearchFilters) -> Self {
        let mut predicate = Predicate::default();
        let mut author_term = None;

        match SearchMode::from_filters(filters) {
            SearchMode::Unscoped => {}
            SearchMode::FullText(term) => predicate.push(Clause::FullText { term }),
            SearchMode::ByTitle(term) => predicate.push(Clause::Contains {
                field: TextField::Title,
                term,
            }),
            SearchMode::ByContent(term) => predicate.push(Clause::Contains {
                field: TextField::Content,
                term,
            }),
            SearchMode::ByTags(term) => predicate.push(Clause::Contains {
                field: TextField::Tags,
                term,
            }),
            SearchMode::ByAuthor(term) => author_term = Some(term),
        }

        if let Some(category) = filters.category {
            predicate.push(Clause::CategoryEq(category));
        }
        if let Some(author) = filters.author {
            predicate.push(Clause::AuthorEq(author));
        }
        if let Some(status) = filters.status {
            predicate.push(Clause::StatusEq(status));
        }
        if let Some(start) = filters.start_date {
            predicate.push(Clause::CreatedAtGte(start));
        }
        if let Some(end) = filters.end_date {
            predicate.push(Clause::CreatedAtLte(end));
        }
        if let Some(min_likes) = filters.min_likes {
            predicate.push(Clause::LikeCountGte(min_likes));
        }

        Self {
            predicate,
            author_term,
        }
    }
}
