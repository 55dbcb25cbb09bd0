//! Activity bookkeeping on top of the tracker.

use crate::{data::ActivityTracker, platform::ChatPlatform};

/// Outcome of seeding one channel at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackfillOutcome {
    /// Newest message timestamp recorded.
    FromHistory(i64),
    /// Channel has no messages; left unrecorded so it is eligible right away.
    Empty,
    /// History unavailable; recorded the current time instead.
    Fallback(i64),
}

pub struct ActivityService<'a> {
    tracker: &'a ActivityTracker,
}

impl<'a> ActivityService<'a> {
    pub fn new(tracker: &'a ActivityTracker) -> Self {
        Self { tracker }
    }

    /// Records a human message in a monitored channel.
    ///
    /// # Returns
    /// - `true` - Tracker advanced
    /// - `false` - Channel not monitored, or timestamp older than the record
    pub async fn record_message(
        &self,
        monitored_channels: &[u64],
        channel_id: u64,
        timestamp: i64,
    ) -> bool {
        if !monitored_channels.contains(&channel_id) {
            return false;
        }

        self.tracker.record(channel_id, timestamp).await
    }

    /// Seeds the tracker from each monitored channel's newest message.
    ///
    /// # Arguments
    /// - `platform` - Source of channel history
    /// - `channels` - Monitored channel ids
    /// - `now` - Timestamp recorded for channels whose history can't be read
    ///
    /// # Returns
    /// - `Vec<(u64, BackfillOutcome)>` - Outcome per channel, in input order
    pub async fn backfill(
        &self,
        platform: &dyn ChatPlatform,
        channels: &[u64],
        now: i64,
    ) -> Vec<(u64, BackfillOutcome)> {
        let mut outcomes = Vec::with_capacity(channels.len());

        for &channel_id in channels {
            let outcome = match platform.latest_message_timestamp(channel_id).await {
                Ok(Some(timestamp)) => {
                    self.tracker.record(channel_id, timestamp).await;
                    BackfillOutcome::FromHistory(timestamp)
                }
                Ok(None) => BackfillOutcome::Empty,
                Err(e) => {
                    tracing::warn!(
                        "Failed to read history for channel {}, assuming active now: {}",
                        channel_id,
                        e
                    );
                    self.tracker.record(channel_id, now).await;
                    BackfillOutcome::Fallback(now)
                }
            };

            tracing::debug!("Backfilled channel {}: {:?}", channel_id, outcome);
            outcomes.push((channel_id, outcome));
        }

        outcomes
    }
}
