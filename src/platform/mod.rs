//! Chat platform seam.
//!
//! The bot's core only needs a handful of operations from Discord. They are
//! collected in [`ChatPlatform`] so the sweeper and command services can run
//! against the serenity-backed [`discord::DiscordPlatform`] in production and
//! a recording fake in tests.

pub mod discord;

use serenity::async_trait;

use crate::{
    error::AppError,
    model::reply::{CommandReply, EmbedMessage},
};

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Resolves a channel, returning its name.
    ///
    /// `None` means the channel is unknown or not visible to the bot; lookup
    /// failures are not surfaced.
    async fn channel_name(&self, channel_id: u64) -> Option<String>;

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError>;

    async fn send_embed(&self, channel_id: u64, embed: &EmbedMessage) -> Result<(), AppError>;

    /// Unix timestamp of the newest message in the channel's history.
    ///
    /// # Returns
    /// - `Ok(Some(timestamp))` - Newest message found
    /// - `Ok(None)` - Channel has no messages
    /// - `Err(AppError)` - Channel missing or history not readable
    async fn latest_message_timestamp(&self, channel_id: u64) -> Result<Option<i64>, AppError>;

    /// Ids of guild members that are not bots and not offline.
    async fn eligible_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError>;

    /// Whether the user holds the administrator permission in the guild.
    async fn is_administrator(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError>;

    /// Sends a command reply as plain text or embed.
    async fn send_reply(&self, channel_id: u64, reply: &CommandReply) -> Result<(), AppError> {
        match reply {
            CommandReply::Text(content) => self.send_message(channel_id, content).await,
            CommandReply::Embed(embed) => self.send_embed(channel_id, embed).await,
        }
    }
}
