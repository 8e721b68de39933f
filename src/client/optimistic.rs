// src/client/optimistic.rs
//! Optimistic like handling for a reading surface that keeps post views
//! in a local cache. A like toggle patches the cached view before the
//! server round trip settles, rolls the patch back when the call fails,
//! and reconciles against server truth when it succeeds.

use crate::application::error::ApplicationResult;
use crate::domain::post::entity::LikeStatus;
use async_trait::async_trait;
use std::collections::HashMap;

/// The slice of a post the reading surface renders and patches locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post_id: i64,
    pub like_status: LikeStatus,
    pub like_count: i64,
}

impl PostView {
    /// Flips the like status and adjusts the count by one, without
    /// waiting for the server. The server response is authoritative;
    /// this only keeps the UI responsive in the meantime.
    pub fn apply_like_patch(&mut self) {
        match self.like_status {
            LikeStatus::Liked => self.like_count -= 1,
            LikeStatus::Unliked => self.like_count += 1,
        }
        self.like_status = self.like_status.toggled();
    }
}

/// Server round trips the like flow depends on.
#[async_trait]
pub trait PostTransport: Send + Sync {
    async fn toggle_like(&self, post_id: i64) -> ApplicationResult<PostView>;
    async fn fetch_post(&self, post_id: i64) -> ApplicationResult<PostView>;
}

/// Cached post views keyed by id. Single-owner; callers serialize access.
#[derive(Debug, Default)]
pub struct PostViewCache {
    entries: HashMap<i64, PostView>,
}

impl PostViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, post_id: i64) -> Option<&PostView> {
        self.entries.get(&post_id)
    }

    pub fn insert(&mut self, view: PostView) {
        self.entries.insert(view.post_id, view);
    }

    pub fn invalidate(&mut self, post_id: i64) {
        self.entries.remove(&post_id);
    }

    fn get_mut(&mut self, post_id: i64) -> Option<&mut PostView> {
        self.entries.get_mut(&post_id)
    }

    fn restore(&mut self, post_id: i64, snapshot: Option<PostView>) {
        match snapshot {
            Some(view) => {
                self.entries.insert(post_id, view);
            }
            None => {
                self.entries.remove(&post_id);
            }
        }
    }
}

/// Drives a like toggle end to end: speculative patch, server call,
/// rollback or reconcile.
pub struct LikeFlow<T: PostTransport> {
    transport: T,
    cache: PostViewCache,
}

impl<T: PostTransport> LikeFlow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: PostViewCache::new(),
        }
    }

    /// Seeds the cache with a view fetched elsewhere (e.g. a listing).
    pub fn prime(&mut self, view: PostView) {
        self.cache.insert(view);
    }

    pub fn cache(&self) -> &PostViewCache {
        &self.cache
    }

    /// Toggles the like for `post_id`.
    ///
    /// The cached view is patched before the transport call so the UI
    /// reflects the toggle immediately. A transport failure restores
    /// the pre-patch snapshot and surfaces the error exactly once; the
    /// caller must not retry automatically. On success the stale entry
    /// is invalidated and replaced with a fresh fetch, which also picks
    /// up likes from other users that landed in between.
    pub async fn toggle_like(&mut self, post_id: i64) -> ApplicationResult<LikeStatus> {
        let snapshot = self.cache.get(post_id).cloned();
        if let Some(view) = self.cache.get_mut(post_id) {
            view.apply_like_patch();
        }

        match self.transport.toggle_like(post_id).await {
            Err(err) => {
                self.cache.restore(post_id, snapshot);
                Err(err)
            }
            Ok(server_view) => {
                let status = server_view.like_status;
                self.cache.invalidate(post_id);
                match self.transport.fetch_post(post_id).await {
                    Ok(fresh) => self.cache.insert(fresh),
                    // The toggle already settled server-side; a failed
                    // refetch leaves the entry invalidated so the next
                    // read goes to the server.
                    Err(_) => {}
                }
                Ok(status)
            }
        }
    }
}
