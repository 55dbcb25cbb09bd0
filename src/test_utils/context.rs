use std::sync::Arc;

use crate::{
    scheduler::inactivity::InactivitySweeper,
    service::command::{CommandInvocation, CommandService},
    state::AppState,
};

use super::{ManualClock, MockPlatform};

/// Assembled test environment.
///
/// `state` is wired to `clock` and `platform`, so moving the clock or
/// inspecting the platform's sent messages observes what the code under test
/// did.
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub platform: Arc<MockPlatform>,
}

impl TestContext {
    pub fn sweeper(&self) -> InactivitySweeper {
        InactivitySweeper::new(self.state.clone(), self.platform.clone())
    }

    pub fn commands(&self) -> CommandService<'_> {
        CommandService::new(&self.state, self.platform.as_ref())
    }

    /// Invocation from `author_id` in `channel_id` of guild 1.
    pub fn invocation(&self, channel_id: u64, author_id: u64) -> CommandInvocation {
        CommandInvocation {
            guild_id: 1,
            channel_id,
            author_id,
            author_name: format!("User{}", author_id),
        }
    }
}
