//! In-process conversation storage with idle expiry.

use async_trait::async_trait;
use matrix_domain::{Conversation, ConversationId, ConversationRepository};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

struct Entry {
    conversation: Conversation,
    touched: Instant,
}

/// [`ConversationRepository`] backed by a `HashMap` behind an async mutex.
///
/// A conversation untouched for `idle_timeout` is treated as gone; expired
/// entries are dropped lazily on access or by [`purge_expired`](Self::purge_expired).
pub struct InMemoryConversationRepository {
    entries: Mutex<HashMap<ConversationId, Entry>>,
    idle_timeout: Option<Duration>,
}

impl InMemoryConversationRepository {
    /// Create a repository. `None` keeps conversations until removed.
    pub fn new(idle_timeout: Option<Duration>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        self.idle_timeout
            .is_some_and(|timeout| now.duration_since(entry.touched) >= timeout)
    }

    /// Drop every expired conversation, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry, now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!("Purged {} idle conversation(s)", removed);
        }
        removed
    }

    /// Number of stored conversations, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn load(&self, id: &ConversationId) -> Option<Conversation> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        match entries.get(id) {
            Some(entry) if self.is_expired(entry, now) => {
                debug!("Conversation {} expired", id);
                entries.remove(id);
                None
            }
            Some(entry) => Some(entry.conversation.clone()),
            None => None,
        }
    }

    async fn save(&self, conversation: Conversation) {
        let id = conversation.id().clone();
        self.entries.lock().await.insert(
            id,
            Entry {
                conversation,
                touched: Instant::now(),
            },
        );
    }

    async fn remove(&self, id: &ConversationId) {
        self.entries.lock().await.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_domain::{Expecting, OperationKind};
    use std::sync::Arc;

    fn in_progress(id: &str) -> Conversation {
        let mut conversation = Conversation::new(id);
        conversation.select(OperationKind::Add);
        conversation
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let repo = InMemoryConversationRepository::default();
        let id = ConversationId::new("a");
        assert!(repo.load(&id).await.is_none());

        repo.save(in_progress("a")).await;
        let loaded = repo.load(&id).await.unwrap();
        assert_eq!(loaded.operation(), Some(OperationKind::Add));
        assert_eq!(loaded.expecting(), Some(Expecting::FirstMatrix));
    }

    #[tokio::test]
    async fn test_conversations_are_independent() {
        let repo = InMemoryConversationRepository::default();
        repo.save(in_progress("a")).await;

        let mut other = Conversation::new("b");
        other.select(OperationKind::Transpose);
        repo.save(other).await;

        let a = repo.load(&ConversationId::new("a")).await.unwrap();
        let b = repo.load(&ConversationId::new("b")).await.unwrap();
        assert_eq!(a.operation(), Some(OperationKind::Add));
        assert_eq!(b.operation(), Some(OperationKind::Transpose));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = InMemoryConversationRepository::default();
        repo.save(in_progress("a")).await;
        repo.remove(&ConversationId::new("a")).await;
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_idle_conversation_expires() {
        let repo = InMemoryConversationRepository::new(Some(Duration::from_millis(10)));
        repo.save(in_progress("a")).await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(repo.load(&ConversationId::new("a")).await.is_none());
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let repo = InMemoryConversationRepository::new(Some(Duration::from_millis(10)));
        repo.save(in_progress("a")).await;
        repo.save(in_progress("b")).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        repo.save(in_progress("c")).await;

        assert_eq!(repo.purge_expired().await, 2);
        assert_eq!(repo.len().await, 1);
        assert!(repo.load(&ConversationId::new("c")).await.is_some());
    }

    #[tokio::test]
    async fn test_no_timeout_keeps_entries() {
        let repo = InMemoryConversationRepository::new(None);
        repo.save(in_progress("a")).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(repo.purge_expired().await, 0);
        assert!(repo.load(&ConversationId::new("a")).await.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves() {
        let repo = Arc::new(InMemoryConversationRepository::default());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(in_progress(format!("c{i}").as_str())).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.len().await, 16);
    }
}
