//! Prefix command parsing.

/// Number of users pinged when `pingrandom` is given no count.
pub const DEFAULT_PING_COUNT: i64 = 3;

/// An administrative command parsed from a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mention a number of random online members alongside a prompt.
    ///
    /// The count is kept unvalidated here; range checks happen in the command
    /// service so the rejection reply is produced in one place.
    PingRandom { count: i64 },
    /// Report how long the invoking channel has been quiet.
    ChatStatus,
    /// Re-read the prompt file.
    ReloadQuestions,
}

/// Argument errors detected while parsing a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// `pingrandom` was given a count that is not an integer.
    InvalidNumber(String),
}

impl Command {
    /// Parses a message into a command.
    ///
    /// Command names are matched case-sensitively after the prefix. Extra
    /// arguments beyond the ones a command takes are ignored.
    ///
    /// # Arguments
    /// - `prefix` - Command marker, e.g. `!`
    /// - `content` - Raw message content
    ///
    /// # Returns
    /// - `None` - Not prefixed or not a known command
    /// - `Some(Ok(command))` - Parsed command
    /// - `Some(Err(error))` - Known command with a malformed argument
    pub fn parse(prefix: &str, content: &str) -> Option<Result<Self, CommandParseError>> {
        if prefix.is_empty() {
            return None;
        }

        let body = content.trim_start().strip_prefix(prefix)?;
        let mut parts = body.split_whitespace();
        let name = parts.next()?;

        match name {
            "pingrandom" => Some(match parts.next() {
                None => Ok(Self::PingRandom {
                    count: DEFAULT_PING_COUNT,
                }),
                Some(arg) => arg
                    .parse::<i64>()
                    .map(|count| Self::PingRandom { count })
                    .map_err(|_| CommandParseError::InvalidNumber(arg.to_string())),
            }),
            "chatstatus" => Some(Ok(Self::ChatStatus)),
            "reloadquestions" => Some(Ok(Self::ReloadQuestions)),
            _ => None,
        }
    }

    /// Whether the command needs the administrator permission.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::PingRandom { .. } | Self::ReloadQuestions)
    }
}
