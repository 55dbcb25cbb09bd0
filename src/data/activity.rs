//! Per-channel last-activity clock.
//!
//! Records live for the lifetime of the process and are never removed. A
//! channel with no record counts as last active at the epoch, which makes it
//! immediately eligible for a revival post.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Map from channel id to the unix timestamp of its last observed activity.
///
/// Cheap to clone; clones share the same map.
#[derive(Clone, Default)]
pub struct ActivityTracker {
    last_activity: Arc<RwLock<HashMap<u64, i64>>>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records activity observed at `timestamp`.
    ///
    /// Only moves the clock forward: a timestamp older than the stored one is
    /// ignored so late or replayed events cannot make a busy channel look idle.
    ///
    /// # Returns
    /// - `true` - The record was created or advanced
    /// - `false` - The timestamp was older than the stored one
    pub async fn record(&self, channel_id: u64, timestamp: i64) -> bool {
        let mut last_activity = self.last_activity.write().await;

        match last_activity.get(&channel_id) {
            Some(&existing) if existing > timestamp => false,
            _ => {
                last_activity.insert(channel_id, timestamp);
                true
            }
        }
    }

    /// Overwrites the record unconditionally.
    ///
    /// Used after a revival post so the next sweep measures from the post.
    pub async fn reset(&self, channel_id: u64, timestamp: i64) {
        self.last_activity
            .write()
            .await
            .insert(channel_id, timestamp);
    }

    pub async fn last_activity(&self, channel_id: u64) -> Option<i64> {
        self.last_activity.read().await.get(&channel_id).copied()
    }

    /// Seconds between the last recorded activity and `now`.
    ///
    /// Unrecorded channels are treated as last active at time 0.
    pub async fn elapsed(&self, channel_id: u64, now: i64) -> i64 {
        now - self.last_activity(channel_id).await.unwrap_or(0)
    }
}
