use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored photo body plus the metadata needed to serve it back.
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// In-memory holding area for the photo bytes backing attachment previews.
///
/// Entries are keyed by the attachment's stable id, never by its position
/// in the draft's photo sequence, so releasing after a removal always frees
/// the entry belonging to the removed photo even when earlier removals have
/// shifted the positions of later ones.
///
/// Every admitted photo has exactly one entry here until it is released:
/// on individual removal, on draft reset after a successful submission, or
/// on session deletion.
pub struct PreviewStore {
    entries: RwLock<HashMap<Uuid, StoredPhoto>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Store the bytes backing a new attachment's preview.
    pub async fn put(&self, id: Uuid, photo: StoredPhoto) {
        let mut entries = self.entries.write().await;
        entries.insert(id, photo);
    }

    /// Look up a preview by attachment id.
    pub async fn get(&self, id: Uuid) -> Option<StoredPhoto> {
        let entries = self.entries.read().await;
        entries.get(&id).cloned()
    }

    /// Release one preview. Returns whether an entry was actually freed.
    pub async fn release(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        let released = entries.remove(&id).is_some();
        if released {
            tracing::debug!("Preview released: {}", id);
        } else {
            tracing::warn!("Preview {} was already released", id);
        }
        released
    }

    /// Release every preview in `ids` (draft reset, session deletion).
    pub async fn release_all(&self, ids: &[Uuid]) {
        let mut entries = self.entries.write().await;
        for id in ids {
            entries.remove(id);
        }
        tracing::debug!("Released {} preview(s)", ids.len());
    }

    /// Number of live entries.
    #[allow(dead_code)]
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(size: usize) -> StoredPhoto {
        StoredPhoto {
            content_type: "image/jpeg".to_string(),
            data: vec![0u8; size],
        }
    }

    #[tokio::test]
    async fn put_get_release_round_trip() {
        let store = PreviewStore::new();
        let id = Uuid::new_v4();

        store.put(id, photo(16)).await;
        assert_eq!(store.get(id).await.unwrap().data.len(), 16);

        assert!(store.release(id).await);
        assert!(store.get(id).await.is_none());
        // second release is a no-op, not a panic
        assert!(!store.release(id).await);
    }

    #[tokio::test]
    async fn release_all_frees_only_the_given_ids() {
        let store = PreviewStore::new();
        let keep = Uuid::new_v4();
        let drop_a = Uuid::new_v4();
        let drop_b = Uuid::new_v4();

        store.put(keep, photo(1)).await;
        store.put(drop_a, photo(2)).await;
        store.put(drop_b, photo(3)).await;

        store.release_all(&[drop_a, drop_b]).await;

        assert_eq!(store.count().await, 1);
        assert!(store.get(keep).await.is_some());
    }
}
