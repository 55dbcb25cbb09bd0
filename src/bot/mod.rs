//! Discord bot integration.
//!
//! The bot tracks human messages in monitored channels, dispatches prefix
//! commands, and on first connect seeds the activity tracker from channel
//! history and starts the inactivity sweeper.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data in the cache
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `MESSAGE_CONTENT` - Read message text for prefix commands (privileged intent)
//! - `GUILD_MEMBERS` - Member list for random pings (privileged intent)
//! - `GUILD_PRESENCES` - Online status for random pings (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod handler;
pub mod start;
