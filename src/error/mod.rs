//! Error types for the bot.
//!
//! `AppError` is the top-level error that startup code and the chat platform
//! seam return. Domain-specific failures (configuration, content loading) live
//! in their own enums and convert into `AppError` with `#[from]`. Nothing past
//! startup is fatal: runtime callers log the error and move on.

pub mod config;
pub mod content;

use thiserror::Error;

use crate::error::{config::ConfigError, content::ContentError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Prompt content could not be read or parsed.
    ///
    /// Only surfaces from the repository layer; the prompt service recovers
    /// from it by substituting fallback content.
    #[error(transparent)]
    ContentErr(#[from] ContentError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while registering or starting the sweep job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// IO error, e.g. binding the keep-alive listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error, e.g. a channel that no longer resolves.
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
