//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link storage keyed by short link.
///
/// A single reader/writer lock guards the map: inserts are exclusive, lookups
/// are shared. Lookup by original link is a linear scan, which is fine for
/// development and tests but not for large data sets.
///
/// No uniqueness is enforced: inserting an existing short link overwrites the
/// previous mapping.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        self.store
            .write()
            .await
            .insert(link.short_link.clone(), link.original_link.clone());
        Ok(())
    }

    async fn find_by_original(&self, original_link: &str) -> Result<String, AppError> {
        self.store
            .read()
            .await
            .iter()
            .find(|(_, original)| original.as_str() == original_link)
            .map(|(short, _)| short.clone())
            .ok_or_else(AppError::not_found)
    }

    async fn find_by_short(&self, short_link: &str) -> Result<String, AppError> {
        self.store
            .read()
            .await
            .get(short_link)
            .cloned()
            .ok_or_else(AppError::not_found)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_and_find_by_short() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(&Link::with_short("https://example.com", "abcdefghij"))
            .await
            .unwrap();

        let original = repo.find_by_short("abcdefghij").await.unwrap();
        assert_eq!(original, "https://example.com");
    }

    #[tokio::test]
    async fn test_find_by_original() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(&Link::with_short("https://a.com", "aaaaaaaaaa"))
            .await
            .unwrap();
        repo.insert(&Link::with_short("https://b.com", "bbbbbbbbbb"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_by_original("https://b.com").await.unwrap(),
            "bbbbbbbbbb"
        );
    }

    #[tokio::test]
    async fn test_missing_entries_are_not_found() {
        let repo = InMemoryLinkRepository::new();

        assert!(repo.find_by_short("nope").await.unwrap_err().is_not_found());
        assert!(
            repo.find_by_original("https://missing.com")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_insert_same_short_overwrites() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(&Link::with_short("https://first.com", "samesamesa"))
            .await
            .unwrap();
        repo.insert(&Link::with_short("https://second.com", "samesamesa"))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(
            repo.find_by_short("samesamesa").await.unwrap(),
            "https://second.com"
        );
        assert!(
            repo.find_by_original("https://first.com")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_concurrent_inserts() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let link = Link::with_short(format!("https://e.com/{i}"), format!("code{i:06}"));
                    repo.insert(&link).await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len().await, 50);
        assert_eq!(
            repo.find_by_original("https://e.com/7").await.unwrap(),
            "code000007"
        );
    }
}
