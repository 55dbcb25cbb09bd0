//! Application state shared by the event handler, commands and the sweeper.
//!
//! Built once in `main` and cloned into each consumer. Every field is cheap to
//! clone and clones share the underlying data:
//! - `Arc<Config>` - immutable configuration
//! - `ActivityTracker` - `Arc`-wrapped channel activity map
//! - `PromptService` - `Arc`-wrapped current prompt set
//! - `SharedRng` - `Arc`-wrapped random source
//! - `Arc<dyn Clock>` - time source

use std::sync::Arc;

use crate::{
    config::Config,
    data::ActivityTracker,
    service::prompt::PromptService,
    util::{
        clock::{Clock, SystemClock},
        rng::SharedRng,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tracker: ActivityTracker,
    pub prompts: PromptService,
    pub rng: SharedRng,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        tracker: ActivityTracker,
        prompts: PromptService,
        rng: SharedRng,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            tracker,
            prompts,
            rng,
            clock,
        }
    }

    /// Production state: loads prompts from the configured path and uses the
    /// wall clock and an OS-seeded random source unless `RNG_SEED` is set.
    pub fn from_config(config: Config) -> Self {
        let prompts = PromptService::new(config.questions_path.clone());
        let rng = match config.rng_seed {
            Some(seed) => SharedRng::seeded(seed),
            None => SharedRng::from_os(),
        };

        Self::new(
            Arc::new(config),
            ActivityTracker::new(),
            prompts,
            rng,
            Arc::new(SystemClock),
        )
    }
}
