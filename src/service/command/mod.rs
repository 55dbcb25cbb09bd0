//! Administrative prefix commands.
//!
//! Each command turns into a [`CommandReply`] that the caller posts back into
//! the invoking channel. User mistakes and missing permissions are answered
//! with a visible reply rather than an error, and never change state.
//!
//! The service is organized into separate modules by command:
//! - `ping_random` - Mention random online members with a prompt
//! - `chat_status` - Report the invoking channel's activity tier
//! - `reload` - Re-read the prompt file

pub mod chat_status;
pub mod ping_random;
pub mod reload;

#[cfg(test)]
mod test;

use crate::{
    model::{
        command::{Command, CommandParseError},
        reply::CommandReply,
    },
    platform::ChatPlatform,
    state::AppState,
};

pub const MISSING_PERMISSIONS: &str = "❌ You need administrator permissions to use this command!";
pub const INVALID_NUMBER: &str = "❌ Please provide a valid number! Usage: `!pingrandom 3`";

/// Who ran a command, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub guild_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    /// Nickname or display name, shown in reply footers.
    pub author_name: String,
}

pub struct CommandService<'a> {
    state: &'a AppState,
    platform: &'a dyn ChatPlatform,
}

impl<'a> CommandService<'a> {
    pub fn new(state: &'a AppState, platform: &'a dyn ChatPlatform) -> Self {
        Self { state, platform }
    }

    /// Runs a parsed command and builds its reply.
    ///
    /// Permission checks come before argument validation, so an unauthorized
    /// user with a malformed count is told about permissions.
    ///
    /// # Arguments
    /// - `invocation` - Invoking user, guild and channel
    /// - `parsed` - Result of [`Command::parse`]
    ///
    /// # Returns
    /// - `CommandReply` - Reply to post in the invoking channel
    pub async fn execute(
        &self,
        invocation: &CommandInvocation,
        parsed: Result<Command, CommandParseError>,
    ) -> CommandReply {
        let requires_admin = match &parsed {
            Ok(command) => command.requires_admin(),
            // Only pingrandom takes an argument.
            Err(CommandParseError::InvalidNumber(_)) => true,
        };

        if requires_admin && !self.is_administrator(invocation).await {
            tracing::info!(
                "Rejected admin command from {} ({}) in channel {}",
                invocation.author_name,
                invocation.author_id,
                invocation.channel_id
            );
            return CommandReply::text(MISSING_PERMISSIONS);
        }

        match parsed {
            Err(CommandParseError::InvalidNumber(value)) => {
                tracing::debug!("Invalid pingrandom count '{}'", value);
                CommandReply::text(INVALID_NUMBER)
            }
            Ok(Command::PingRandom { count }) => self.ping_random(invocation, count).await,
            Ok(Command::ChatStatus) => self.chat_status(invocation.channel_id).await,
            Ok(Command::ReloadQuestions) => self.reload_questions().await,
        }
    }

    /// Permission lookups that fail count as "not an administrator".
    async fn is_administrator(&self, invocation: &CommandInvocation) -> bool {
        match self
            .platform
            .is_administrator(invocation.guild_id, invocation.author_id)
            .await
        {
            Ok(is_admin) => is_admin,
            Err(e) => {
                tracing::warn!(
                    "Failed to check permissions for user {} in guild {}: {}",
                    invocation.author_id,
                    invocation.guild_id,
                    e
                );
                false
            }
        }
    }
}
