use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    config::Config,
    data::ActivityTracker,
    model::prompt::PromptSet,
    service::prompt::PromptService,
    state::AppState,
    util::rng::SharedRng,
};

use super::{ManualClock, MockPlatform, TestContext};

/// Fluent builder for a [`TestContext`].
///
/// Defaults mirror production: one hour threshold, five minute interval, `!`
/// prefix, no monitored channels, clock at 0, seed 0 and a small fixed prompt
/// set.
pub struct TestBuilder {
    monitored_channels: Vec<u64>,
    inactive_threshold: i64,
    sweep_interval: u64,
    prompts: PromptSet,
    questions_path: PathBuf,
    seed: u64,
    now: i64,
    platform: MockPlatform,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            monitored_channels: Vec::new(),
            inactive_threshold: 3600,
            sweep_interval: 300,
            prompts: PromptSet::new(
                vec!["Question one?".to_string(), "Question two?".to_string()],
                vec!["Icebreaker one?".to_string()],
            ),
            questions_path: PathBuf::from("questions.json"),
            seed: 0,
            now: 0,
            platform: MockPlatform::new(),
        }
    }

    pub fn monitored(mut self, channels: &[u64]) -> Self {
        self.monitored_channels = channels.to_vec();
        self
    }

    pub fn threshold(mut self, seconds: i64) -> Self {
        self.inactive_threshold = seconds;
        self
    }

    pub fn interval(mut self, seconds: u64) -> Self {
        self.sweep_interval = seconds;
        self
    }

    pub fn prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    /// Path the prompt service reloads from.
    pub fn questions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.questions_path = path.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn now(mut self, now: i64) -> Self {
        self.now = now;
        self
    }

    pub fn platform(mut self, platform: MockPlatform) -> Self {
        self.platform = platform;
        self
    }

    pub fn build(self) -> TestContext {
        let config = Config {
            discord_token: "test-token".to_string(),
            monitored_channels: self.monitored_channels,
            inactive_threshold: self.inactive_threshold,
            sweep_interval: self.sweep_interval,
            questions_path: self.questions_path.clone(),
            command_prefix: "!".to_string(),
            keep_alive_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            rng_seed: Some(self.seed),
        };

        let clock = Arc::new(ManualClock::new(self.now));
        let state = AppState::new(
            Arc::new(config),
            ActivityTracker::new(),
            PromptService::with_prompts(self.questions_path, self.prompts),
            SharedRng::seeded(self.seed),
            clock.clone(),
        );

        TestContext {
            state,
            clock,
            platform: Arc::new(self.platform),
        }
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
