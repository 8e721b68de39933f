use crate::domain::user::{Role, UserId};

/// Identity attached to an authenticated request. Verification happens
/// upstream (session gateway); the core only consumes the resolved
/// `{id, role}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
