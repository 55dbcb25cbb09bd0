use crate::{
    data::ActivityTracker,
    error::AppError,
    model::{prompt::PromptSet, reply::EmbedMessage},
    platform::ChatPlatform,
    scheduler::inactivity::InactivitySweeper,
    scheduler::inactivity::SweepReport,
    test_utils::{MockPlatform, SentMessage, TestBuilder},
};
