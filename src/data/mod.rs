//! In-process state and file access.
//!
//! - `activity` - per-channel last-activity clock
//! - `prompt` - prompt file reader

pub mod activity;
pub mod prompt;

pub use activity::ActivityTracker;
pub use prompt::PromptFileRepository;
