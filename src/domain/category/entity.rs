use crate::domain::category::value_objects::CategoryId;

/// Category projection joined into post listings: id and name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
