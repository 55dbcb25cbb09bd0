use serenity::all::{Context, Message};

use crate::{
    model::{command::Command, reply::CommandReply},
    platform::{discord::DiscordPlatform, ChatPlatform},
    service::{
        activity::ActivityService,
        command::{CommandInvocation, CommandService},
    },
    state::AppState,
};

/// The parts of a gateway message the bot acts on.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub author_is_bot: bool,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub author_id: u64,
    /// Nickname or display name.
    pub author_name: String,
    pub timestamp: i64,
    pub content: String,
}

impl IncomingMessage {
    fn from_message(message: &Message) -> Self {
        Self {
            author_is_bot: message.author.bot,
            guild_id: message.guild_id.map(|id| id.get()),
            channel_id: message.channel_id.get(),
            author_id: message.author.id.get(),
            author_name: message
                .member
                .as_ref()
                .and_then(|member| member.nick.clone())
                .unwrap_or_else(|| message.author.display_name().to_string()),
            timestamp: message.timestamp.unix_timestamp(),
            content: message.content.clone(),
        }
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    let incoming = IncomingMessage::from_message(&message);
    let platform = DiscordPlatform::new(ctx.http.clone(), ctx.cache.clone());

    let Some(reply) = process_message(state, &platform, &incoming).await else {
        return;
    };

    if let Err(e) = platform.send_reply(incoming.channel_id, &reply).await {
        tracing::error!(
            "Failed to send command reply in channel {}: {}",
            incoming.channel_id,
            e
        );
    }
}

/// Tracks activity for a message and runs it as a command if it is one.
///
/// Bot messages and DMs are ignored. A human message in a monitored channel
/// advances that channel's activity clock before any command runs, so a
/// command sees its own message as the latest activity.
///
/// # Returns
/// - `Some(CommandReply)` - Message was a command; reply to post
/// - `None` - Nothing to post
pub async fn process_message(
    state: &AppState,
    platform: &dyn ChatPlatform,
    incoming: &IncomingMessage,
) -> Option<CommandReply> {
    if incoming.author_is_bot {
        return None;
    }

    let guild_id = incoming.guild_id?;

    let recorded = ActivityService::new(&state.tracker)
        .record_message(
            &state.config.monitored_channels,
            incoming.channel_id,
            incoming.timestamp,
        )
        .await;
    if recorded {
        tracing::debug!("Recorded activity in channel {}", incoming.channel_id);
    }

    let parsed = Command::parse(&state.config.command_prefix, &incoming.content)?;

    let invocation = CommandInvocation {
        guild_id,
        channel_id: incoming.channel_id,
        author_id: incoming.author_id,
        author_name: incoming.author_name.clone(),
    };

    Some(
        CommandService::new(state, platform)
            .execute(&invocation, parsed)
            .await,
    )
}
