//! In-memory `ChatPlatform` that records outbound messages.

use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::{error::AppError, model::reply::EmbedMessage, platform::ChatPlatform};

/// A message the platform was asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text { channel_id: u64, content: String },
    Embed { channel_id: u64, embed: EmbedMessage },
}

impl SentMessage {
    pub fn channel_id(&self) -> u64 {
        match self {
            Self::Text { channel_id, .. } | Self::Embed { channel_id, .. } => *channel_id,
        }
    }
}

/// Fake platform configured through builder methods.
///
/// Channels must be registered with [`MockPlatform::with_channel`] to resolve
/// and accept sends. History defaults to an error (as for a missing channel)
/// unless set with [`MockPlatform::with_history`].
#[derive(Default)]
pub struct MockPlatform {
    channels: HashMap<u64, String>,
    history: HashMap<u64, Option<i64>>,
    failing_sends: HashSet<u64>,
    members: Option<Vec<u64>>,
    admins: HashSet<u64>,
    sent: Mutex<Vec<SentMessage>>,
    member_lookups: Mutex<usize>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel_id: u64, name: &str) -> Self {
        self.channels.insert(channel_id, name.to_string());
        self
    }

    /// Sets the newest message timestamp for a channel (`None` for empty).
    pub fn with_history(mut self, channel_id: u64, latest: Option<i64>) -> Self {
        self.history.insert(channel_id, latest);
        self
    }

    /// Makes every send to the channel fail, as for a revoked permission.
    pub fn with_failing_send(mut self, channel_id: u64) -> Self {
        self.failing_sends.insert(channel_id);
        self
    }

    pub fn with_members(mut self, members: Vec<u64>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_admin(mut self, user_id: u64) -> Self {
        self.admins.insert(user_id);
        self
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, channel_id: u64) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.channel_id() == channel_id)
            .collect()
    }

    /// Number of `eligible_members` calls made so far.
    pub fn member_lookups(&self) -> usize {
        *self.member_lookups.lock().unwrap()
    }

    fn check_sendable(&self, channel_id: u64) -> Result<(), AppError> {
        if !self.channels.contains_key(&channel_id) {
            return Err(AppError::NotFound(format!("Unknown channel {}", channel_id)));
        }
        if self.failing_sends.contains(&channel_id) {
            return Err(AppError::IoErr(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("Missing permissions to send in {}", channel_id),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn channel_name(&self, channel_id: u64) -> Option<String> {
        self.channels.get(&channel_id).cloned()
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        self.check_sendable(channel_id)?;
        self.sent.lock().unwrap().push(SentMessage::Text {
            channel_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn send_embed(&self, channel_id: u64, embed: &EmbedMessage) -> Result<(), AppError> {
        self.check_sendable(channel_id)?;
        self.sent.lock().unwrap().push(SentMessage::Embed {
            channel_id,
            embed: embed.clone(),
        });
        Ok(())
    }

    async fn latest_message_timestamp(&self, channel_id: u64) -> Result<Option<i64>, AppError> {
        self.history
            .get(&channel_id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Unknown channel {}", channel_id)))
    }

    async fn eligible_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        *self.member_lookups.lock().unwrap() += 1;
        self.members
            .clone()
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not in cache", guild_id)))
    }

    async fn is_administrator(&self, _guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        Ok(self.admins.contains(&user_id))
    }
}
