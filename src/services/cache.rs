//! Single-slot cache with a fixed TTL.
//!
//! The ISS position route caches its last successful payload for a short
//! window to keep from hammering the position APIs. The slot is not keyed:
//! there is exactly one cached value for the whole process.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

pub struct TtlSlot<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> TtlSlot<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached value if one was stored less than `ttl` ago.
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Store a value, resetting the TTL window.
    pub async fn put(&self, value: T) {
        let mut slot = self.slot.write().await;
        *slot = Some((Instant::now(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_slot_returns_none() {
        let slot: TtlSlot<u32> = TtlSlot::new(Duration::from_secs(30));
        assert_eq!(slot.get().await, None);
    }

    #[tokio::test]
    async fn fresh_value_is_returned() {
        let slot = TtlSlot::new(Duration::from_secs(30));
        slot.put("position".to_string()).await;
        assert_eq!(slot.get().await, Some("position".to_string()));
    }

    #[tokio::test]
    async fn stale_value_is_dropped() {
        let slot = TtlSlot::new(Duration::from_millis(20));
        slot.put(42u32).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(slot.get().await, None);
    }

    #[tokio::test]
    async fn put_resets_the_window() {
        let slot = TtlSlot::new(Duration::from_millis(60));
        slot.put(1u32).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        slot.put(2u32).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        // First value would be stale by now; the rewrite keeps the slot warm.
        assert_eq!(slot.get().await, Some(2));
    }
}
