use crate::domain::user::value_objects::UserId;

/// Author projection joined into post listings: only the fields the
/// listing pipeline exposes (username, first/last name), never email or
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    /// True when the search term matches the username or either name
    /// part, case-insensitively.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        let hit = |value: &str| value.to_lowercase().contains(&needle);
        hit(&self.username)
            || self.first_name.as_deref().is_some_and(hit)
            || self.last_name.as_deref().is_some_and(hit)
    }
}
