// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the `created_at`/`updated_at` stamps on posts and
/// comments. Services take it as a port so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
