//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data layer. They own
//! the rules of the bot:
//!
//! - **Prompt** (`prompt`) - Content store with fail-soft loading and atomic reload
//! - **Format** (`format`) - Revival message decoration and prompt selection
//! - **Activity** (`activity`) - Message tracking and startup backfill
//! - **Command** (`command/`) - Administrative prefix commands

pub mod activity;
pub mod command;
pub mod format;
pub mod prompt;
