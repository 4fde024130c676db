//! Per-domain state stores.
//!
//! Each store owns one slice of client state (a list or a single record,
//! initially empty), a `loading` flag and async actions that call the
//! [`ApiClient`]. Stores are cheap to clone: clones share the same slice,
//! so a clone can be moved into a spawned task while the UI keeps reading
//! snapshots.
//!
//! Every action raises `loading` through a [`LoadingGuard`], which lowers it
//! again when dropped, so the flag is reset on success and on failure.
//! Errors from the API client are returned unmodified. Stores never retry
//! and never share data with one another.

mod analytics;
mod auth;
mod chat;
mod community;
mod crisis;
mod goals;
mod mood;
mod notifications;
mod personalization;
mod therapy;

pub use analytics::{AnalyticsState, AnalyticsStore};
pub use auth::{AuthState, AuthStore};
pub use chat::{ChatState, ChatStore};
pub use community::{CommunityState, CommunityStore};
pub use crisis::{CrisisState, CrisisStore};
pub use goals::{GoalState, GoalStore};
pub use mood::{MoodState, MoodStore, DEFAULT_HISTORY_PERIOD};
pub use notifications::{NotificationState, NotificationStore};
pub use personalization::{PersonalizationState, PersonalizationStore};
pub use therapy::{TherapyState, TherapyStore};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::ApiClient;

/// Shared `loading` flag of a store.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }
}

/// Lowers the owning [`LoadingFlag`] when dropped.
#[must_use = "the flag is lowered as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Shared, mutex-protected store state.
#[derive(Debug, Default)]
pub(crate) struct Shared<T>(Arc<Mutex<T>>);

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Shared<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    /// Lock the state. A panic in another holder does not make the slice
    /// unreadable; the last written value is used as-is.
    pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Shared<T> {
    pub(crate) fn snapshot(&self) -> T {
        self.lock().clone()
    }
}

/// Replace the element with the same id, or append it when absent.
pub(crate) fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &str) {
    let key = id(&item).to_string();
    match items.iter_mut().find(|existing| id(existing) == key) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// Every domain store, built over one API client.
#[derive(Debug, Clone)]
pub struct Stores {
    pub auth: AuthStore,
    pub mood: MoodStore,
    pub chat: ChatStore,
    pub therapy: TherapyStore,
    pub goals: GoalStore,
    pub analytics: AnalyticsStore,
    pub personalization: PersonalizationStore,
    pub crisis: CrisisStore,
    pub community: CommunityStore,
    pub notifications: NotificationStore,
}

impl Stores {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: AuthStore::new(api.clone()),
            mood: MoodStore::new(api.clone()),
            chat: ChatStore::new(api.clone()),
            therapy: TherapyStore::new(api.clone()),
            goals: GoalStore::new(api.clone()),
            analytics: AnalyticsStore::new(api.clone()),
            personalization: PersonalizationStore::new(api.clone()),
            crisis: CrisisStore::new(api.clone()),
            community: CommunityStore::new(api.clone()),
            notifications: NotificationStore::new(api),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{InMemoryTokenStore, MockHttpClient};

    pub const BASE: &str = "http://api.test";

    /// API client over a recording mock and an in-memory token store.
    pub fn mock_api() -> (ApiClient, MockHttpClient, InMemoryTokenStore) {
        let http = MockHttpClient::new();
        let tokens = InMemoryTokenStore::new();
        let api = ApiClient::new(BASE, Arc::new(http.clone()), Arc::new(tokens.clone()));
        (api, http, tokens)
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", BASE, path)
    }
}
