//! Prompt content store.
//!
//! Loading never fails: any read or parse error is logged and replaced with a
//! single fallback prompt per pool. Readers take an `Arc<PromptSet>` snapshot,
//! and reload swaps that `Arc` in one assignment, so a reader sees either the
//! old set or the new one and never a mix.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{data::PromptFileRepository, model::prompt::PromptSet};

/// Shared handle to the current prompt set. Clones share the same content.
#[derive(Clone)]
pub struct PromptService {
    path: PathBuf,
    current: Arc<RwLock<Arc<PromptSet>>>,
}

impl PromptService {
    /// Creates the store and performs the initial load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = Self::load_from(&path);

        Self {
            path,
            current: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Creates a store seeded with an in-memory set.
    #[cfg(test)]
    pub fn with_prompts(path: impl Into<PathBuf>, prompts: PromptSet) -> Self {
        Self {
            path: path.into(),
            current: Arc::new(RwLock::new(Arc::new(prompts))),
        }
    }

    /// Reads the prompt file, falling back to the default set on any failure.
    pub fn load(&self) -> PromptSet {
        Self::load_from(&self.path)
    }

    fn load_from(path: &PathBuf) -> PromptSet {
        match PromptFileRepository::new(path).load() {
            Ok(prompts) => {
                tracing::info!(
                    "Loaded {} questions and {} icebreakers from {}",
                    prompts.questions().len(),
                    prompts.icebreakers().len(),
                    path.display()
                );
                prompts
            }
            Err(e) => {
                tracing::error!("Error loading questions, using fallback prompts: {}", e);
                PromptSet::fallback()
            }
        }
    }

    /// Snapshot of the current prompt set.
    pub async fn current(&self) -> Arc<PromptSet> {
        self.current.read().await.clone()
    }

    /// Re-reads the prompt file and swaps it in.
    ///
    /// # Returns
    /// - `Arc<PromptSet>` - The newly active set (fallback content on failure)
    pub async fn reload(&self) -> Arc<PromptSet> {
        let prompts = Arc::new(self.load());
        *self.current.write().await = prompts.clone();
        prompts
    }
}
