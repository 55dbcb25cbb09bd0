//! Outbound message payloads produced by the command layer.

/// Gold, used for the random ping embed.
pub const GOLD: u32 = 0xf1c40f;

/// A titled, coloured message.
///
/// Platform-neutral so services can build replies without touching serenity's
/// builders; the Discord adapter converts it into a `CreateEmbed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMessage {
    pub title: String,
    pub description: String,
    /// Embed colour as hex integer.
    pub color: u32,
    pub footer: Option<String>,
}

/// What a command sends back into the invoking channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Text(String),
    Embed(EmbedMessage),
}

impl CommandReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The text body, or the embed description.
    #[cfg(test)]
    pub fn body(&self) -> &str {
        match self {
            Self::Text(content) => content,
            Self::Embed(embed) => &embed.description,
        }
    }
}
