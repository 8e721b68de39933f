use crate::domain::post::entity::Post;
use crate::domain::user::{Role, UserId};

/// A post may be edited by its author or by an admin.
pub struct CanEditPostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
    role: Role,
}

impl<'a> CanEditPostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId, role: Role) -> Self {
        Self {
            post,
            user_id,
            role,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role.is_admin() || self.post.author_id == self.user_id
    }
}

/// Deletion shares the author-or-admin rule.
pub struct CanDeletePostSpec<'a> {
    inner: CanEditPostSpec<'a>,
}

impl<'a> CanDeletePostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId, role: Role) -> Self {
        Self {
            inner: CanEditPostSpec::new(post, user_id, role),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::value_objects::{PostContent, PostId, PostStatus, PostTitle};
    use chrono::Utc;

    fn post_by(author: i64) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("Ownership").unwrap(),
            content: PostContent::new("...").unwrap(),
            image: None,
            author_id: UserId::new(author).unwrap(),
            category_ids: vec![],
            tags: vec![],
            status: PostStatus::Published,
            view_count: 0,
            like_count: 0,
            likes: vec![],
            comments_count: 0,
            comment_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_and_admin_may_edit_others_may_not() {
        let post = post_by(1);
        assert!(CanEditPostSpec::new(&post, UserId(1), Role::User).is_satisfied());
        assert!(CanEditPostSpec::new(&post, UserId(2), Role::Admin).is_satisfied());
        assert!(!CanEditPostSpec::new(&post, UserId(2), Role::User).is_satisfied());
    }
}
