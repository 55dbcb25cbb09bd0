use rand::seq::IndexedRandom;

use super::{CommandInvocation, CommandService};
use crate::{
    model::reply::{CommandReply, EmbedMessage, GOLD},
    service::format::pick_any_prompt,
};

pub const MIN_PING_COUNT: i64 = 1;
pub const MAX_PING_COUNT: i64 = 10;

pub const OUT_OF_RANGE: &str = "❌ Please choose between 1-10 users to ping!";
pub const MEMBER_LOOKUP_FAILED: &str = "❌ Couldn't look up server members right now.";

impl CommandService<'_> {
    /// Mentions `count` random online members together with a prompt.
    ///
    /// Members are sampled without replacement from the guild's non-bot,
    /// non-offline members. The prompt is drawn from questions and
    /// icebreakers combined.
    ///
    /// # Returns
    /// - `CommandReply::Embed` - Mentions and prompt
    /// - `CommandReply::Text` - Count out of range, not enough eligible
    ///   members, or member lookup failed
    pub async fn ping_random(&self, invocation: &CommandInvocation, count: i64) -> CommandReply {
        if !(MIN_PING_COUNT..=MAX_PING_COUNT).contains(&count) {
            return CommandReply::text(OUT_OF_RANGE);
        }
        let count = count as usize;

        let members = match self.platform.eligible_members(invocation.guild_id).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!(
                    "Failed to list members of guild {}: {}",
                    invocation.guild_id,
                    e
                );
                return CommandReply::text(MEMBER_LOOKUP_FAILED);
            }
        };

        if members.len() < count {
            return CommandReply::text(format!(
                "❌ Not enough active members! Only {} available.",
                members.len()
            ));
        }

        let prompts = self.state.prompts.current().await;
        let (chosen, prompt) = self.state.rng.with(|rng| {
            let chosen: Vec<u64> = members.choose_multiple(rng, count).copied().collect();
            let prompt = pick_any_prompt(rng, &prompts).to_string();
            (chosen, prompt)
        });

        let mentions = chosen
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!(
            "{} pinged {} random members in channel {}",
            invocation.author_name,
            chosen.len(),
            invocation.channel_id
        );

        CommandReply::Embed(EmbedMessage {
            title: "🎯 Random Ping Time!".to_string(),
            description: format!("{}\n\n**{}**", mentions, prompt),
            color: GOLD,
            footer: Some(format!("Requested by {}", invocation.author_name)),
        })
    }
}
