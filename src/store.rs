//! Session storage
//!
//! Sessions live in process memory only. The store also hands out one lock
//! per scope id so a command can read, call the collaborator and write back
//! without another command for the same id interleaving.

use crate::game::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Held for the duration of one command on one scope id
pub type SessionLock = OwnedMutexGuard<()>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Option<Session>;

    async fn put(&self, id: &str, session: Session);

    /// Wait until no other command holds `id`
    async fn lock(&self, id: &str) -> SessionLock;

    /// Number of known sessions
    async fn len(&self) -> usize;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn get(&self, id: &str) -> Option<Session> {
        (**self).get(id).await
    }

    async fn put(&self, id: &str, session: Session) {
        (**self).put(id, session).await;
    }

    async fn lock(&self, id: &str) -> SessionLock {
        (**self).lock(id).await
    }

    async fn len(&self) -> usize {
        (**self).len().await
    }
}

/// In-memory store: no TTL, no eviction
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn put(&self, id: &str, session: Session) {
        self.sessions.write().await.insert(id.to_string(), session);
    }

    async fn lock(&self, id: &str) -> SessionLock {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
