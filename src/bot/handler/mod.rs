use serenity::all::{Context, Message, Ready};
use serenity::async_trait;
use serenity::prelude::EventHandler;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

use crate::state::AppState;

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Running sweep scheduler; `None` until the first `ready`.
    pub scheduler: Arc<Mutex<Option<JobScheduler>>>,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            scheduler: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, &self.scheduler, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }
}
