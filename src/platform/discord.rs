//! Serenity-backed [`ChatPlatform`].
//!
//! Member, presence and role data come from the gateway cache, which requires
//! the `GUILD_MEMBERS` and `GUILD_PRESENCES` intents. Channels, messages and
//! members' role lists go through the HTTP client.

use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, GetMessages, GuildId,
        OnlineStatus, RoleId, UserId,
    },
    async_trait,
    cache::Cache,
    http::Http,
};
use std::sync::Arc;

use super::ChatPlatform;
use crate::{error::AppError, model::reply::EmbedMessage};

#[derive(Clone)]
pub struct DiscordPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

/// Converts a platform-neutral embed into serenity's builder.
fn build_embed(embed: &EmbedMessage) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .color(embed.color);

    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }

    builder
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn channel_name(&self, channel_id: u64) -> Option<String> {
        let channel_id = ChannelId::new(channel_id);

        match self.http.get_channel(channel_id).await {
            Ok(channel) => Some(
                channel
                    .guild()
                    .map(|c| c.name)
                    .unwrap_or_else(|| channel_id.to_string()),
            ),
            Err(e) => {
                tracing::debug!("Channel {} did not resolve: {}", channel_id, e);
                None
            }
        }
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .say(&self.http, content)
            .await?;

        Ok(())
    }

    async fn send_embed(&self, channel_id: u64, embed: &EmbedMessage) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(build_embed(embed)))
            .await?;

        Ok(())
    }

    async fn latest_message_timestamp(&self, channel_id: u64) -> Result<Option<i64>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(1))
            .await?;

        Ok(messages
            .first()
            .map(|message| message.timestamp.unix_timestamp()))
    }

    async fn eligible_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        let guild = self
            .cache
            .guild(GuildId::new(guild_id))
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not in cache", guild_id)))?;

        // Members without a cached presence are offline.
        let members = guild
            .members
            .values()
            .filter(|member| !member.user.bot)
            .filter(|member| {
                guild
                    .presences
                    .get(&member.user.id)
                    .is_some_and(|presence| presence.status != OnlineStatus::Offline)
            })
            .map(|member| member.user.id.get())
            .collect();

        Ok(members)
    }

    async fn is_administrator(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let guild_id = GuildId::new(guild_id);
        let user_id = UserId::new(user_id);

        let member = self.http.get_member(guild_id, user_id).await?;

        let guild = self
            .cache
            .guild(guild_id)
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not in cache", guild_id)))?;

        if guild.owner_id == user_id {
            return Ok(true);
        }

        // The @everyone role shares the guild's id.
        let everyone = RoleId::new(guild_id.get());

        Ok(member
            .roles
            .iter()
            .chain(std::iter::once(&everyone))
            .filter_map(|role_id| guild.roles.get(role_id))
            .any(|role| role.permissions.administrator()))
    }
}
