use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    platform::ChatPlatform,
    service::format::{format_revival_message, pick_revival_prompt},
    state::AppState,
};

/// What happened to each channel during one sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Revival message delivered.
    pub revived: Vec<u64>,
    /// Channel resolved but the send failed.
    pub failed: Vec<u64>,
    /// Channel did not resolve; nothing sent.
    pub skipped: Vec<u64>,
}

impl SweepReport {
    /// Channels whose inactivity threshold was reached this sweep.
    pub fn triggered(&self) -> usize {
        self.revived.len() + self.failed.len() + self.skipped.len()
    }
}

enum Revival {
    Sent,
    Failed,
    Unresolved,
}

/// Posts revival prompts into monitored channels that have gone quiet.
#[derive(Clone)]
pub struct InactivitySweeper {
    state: AppState,
    platform: Arc<dyn ChatPlatform>,
}

impl InactivitySweeper {
    pub fn new(state: AppState, platform: Arc<dyn ChatPlatform>) -> Self {
        Self { state, platform }
    }

    /// Sweeps at the current clock time.
    pub async fn tick(&self) -> SweepReport {
        let now = self.state.clock.now();
        self.sweep_at(now).await
    }

    /// Sweeps every monitored channel as of `now`.
    ///
    /// A channel quiet for at least the threshold gets a revival post and its
    /// activity reset to `now`, whether or not the post was delivered, so it
    /// is not retried on the next tick. Failures only affect their own
    /// channel.
    ///
    /// # Arguments
    /// - `now` - Sweep time in unix seconds
    ///
    /// # Returns
    /// - `SweepReport` - Per-channel outcome for channels that triggered
    pub async fn sweep_at(&self, now: i64) -> SweepReport {
        let config = &self.state.config;
        let mut report = SweepReport::default();

        for &channel_id in &config.monitored_channels {
            let elapsed = self.state.tracker.elapsed(channel_id, now).await;

            if elapsed < config.inactive_threshold {
                continue;
            }

            tracing::info!(
                "Channel {} inactive for {:.1} minutes - reviving",
                channel_id,
                elapsed as f64 / 60.0
            );

            // Reset before sending so activity recorded during the send is kept.
            self.state.tracker.reset(channel_id, now).await;

            match self.revive(channel_id).await {
                Revival::Sent => report.revived.push(channel_id),
                Revival::Failed => report.failed.push(channel_id),
                Revival::Unresolved => report.skipped.push(channel_id),
            }
        }

        report
    }

    async fn revive(&self, channel_id: u64) -> Revival {
        let Some(channel_name) = self.platform.channel_name(channel_id).await else {
            return Revival::Unresolved;
        };

        let prompts = self.state.prompts.current().await;
        let content = self.state.rng.with(|rng| {
            let prompt = pick_revival_prompt(rng, &prompts);
            format_revival_message(rng, prompt)
        });

        match self.platform.send_message(channel_id, &content).await {
            Ok(()) => {
                tracing::info!("Sent revival message in #{}", channel_name);
                Revival::Sent
            }
            Err(e) => {
                tracing::error!("Error sending message in #{}: {}", channel_name, e);
                Revival::Failed
            }
        }
    }
}

/// Starts the inactivity sweep scheduler
///
/// Runs one sweep immediately, then repeats every `sweep_interval` seconds.
/// The returned scheduler must be kept alive for the job to keep running.
///
/// # Arguments
/// - `sweeper`: Sweeper to run on each tick
pub async fn start_scheduler(sweeper: InactivitySweeper) -> Result<JobScheduler, AppError> {
    let interval = Duration::from_secs(sweeper.state.config.sweep_interval);

    sweeper.tick().await;

    let scheduler = JobScheduler::new().await?;

    let job_sweeper = sweeper.clone();
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let sweeper = job_sweeper.clone();

        Box::pin(async move {
            let report = sweeper.tick().await;
            tracing::debug!(
                "Inactivity sweep finished: {} triggered ({:?})",
                report.triggered(),
                report
            );
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Inactivity sweeper started (every {}s, threshold {}s)",
        interval.as_secs(),
        sweeper.state.config.inactive_threshold
    );

    Ok(scheduler)
}
