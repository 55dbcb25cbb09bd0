//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including
//! reconnects. The first one seeds the activity tracker from channel history
//! and starts the inactivity sweeper; later ones only log.

use serenity::all::{ActivityData, Context, Ready};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

use crate::{
    platform::discord::DiscordPlatform,
    scheduler::inactivity::{start_scheduler, InactivitySweeper},
    service::activity::ActivityService,
    state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `scheduler` - Slot holding the running sweep scheduler
/// - `ctx` - Discord context for HTTP, cache and presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &AppState,
    scheduler: &Arc<Mutex<Option<JobScheduler>>>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for quiet channels")));

    let mut running = scheduler.lock().await;
    if running.is_some() {
        tracing::debug!("Reconnected; inactivity sweeper already running");
        return;
    }

    let prompts = state.prompts.current().await;
    tracing::info!(
        "Monitoring {} channels with {} questions and {} icebreakers",
        state.config.monitored_channels.len(),
        prompts.questions().len(),
        prompts.icebreakers().len()
    );

    let platform = Arc::new(DiscordPlatform::new(ctx.http.clone(), ctx.cache.clone()));

    ActivityService::new(&state.tracker)
        .backfill(
            platform.as_ref(),
            &state.config.monitored_channels,
            state.clock.now(),
        )
        .await;

    let sweeper = InactivitySweeper::new(state.clone(), platform);

    match start_scheduler(sweeper).await {
        Ok(job_scheduler) => {
            *running = Some(job_scheduler);
            tracing::info!("Bot setup complete");
        }
        Err(e) => {
            tracing::error!("Failed to start inactivity sweeper: {}", e);
        }
    }
}
