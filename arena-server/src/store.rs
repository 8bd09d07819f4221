use arena_core::Comparison;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the most recent comparison until it is cleared or replaced.
#[derive(Clone, Default)]
pub struct ResultStore {
    latest: Arc<RwLock<Option<Comparison>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn latest(&self) -> Option<Comparison> {
        self.latest.read().await.clone()
    }

    pub async fn replace(&self, comparison: Comparison) {
        *self.latest.write().await = Some(comparison);
    }

    /// Returns whether there was anything to clear.
    pub async fn clear(&self) -> bool {
        self.latest.write().await.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comparison(id: &str) -> Comparison {
        Comparison {
            id: id.to_string(),
            prompt: "p".to_string(),
            region: "us-west-2".to_string(),
            started_at: Utc::now(),
            results: vec![],
        }
    }

    #[tokio::test]
    async fn test_replace_and_clear() {
        let store = ResultStore::new();
        assert!(store.latest().await.is_none());
        assert!(!store.clear().await);

        store.replace(comparison("a")).await;
        store.replace(comparison("b")).await;
        assert_eq!(store.latest().await.map(|c| c.id), Some("b".to_string()));

        let shared = store.clone();
        assert!(shared.clear().await);
        assert!(store.latest().await.is_none());
    }
}
