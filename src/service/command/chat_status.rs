use super::CommandService;
use crate::model::{
    activity::ActivityTier,
    reply::{CommandReply, EmbedMessage},
};

pub const NOT_MONITORED: &str = "ℹ️ This channel is not being monitored for activity.";
pub const NO_ACTIVITY: &str = "📊 No activity recorded yet for this channel.";

impl CommandService<'_> {
    /// Reports how long the channel has been quiet.
    ///
    /// Unmonitored channels get [`NOT_MONITORED`] whatever the tracker holds.
    pub async fn chat_status(&self, channel_id: u64) -> CommandReply {
        if !self.state.config.is_monitored(channel_id) {
            return CommandReply::text(NOT_MONITORED);
        }

        let Some(last_active) = self.state.tracker.last_activity(channel_id).await else {
            return CommandReply::text(NO_ACTIVITY);
        };

        let elapsed = (self.state.clock.now() - last_active).max(0);
        let minutes = elapsed as f64 / 60.0;
        let tier = ActivityTier::from_minutes(minutes);

        CommandReply::Embed(EmbedMessage {
            title: "📊 Channel Activity Status".to_string(),
            description: format!(
                "**Status:** {}\n**Last message:** {:.1} minutes ago",
                tier.label(),
                minutes
            ),
            color: tier.color(),
            footer: None,
        })
    }
}
