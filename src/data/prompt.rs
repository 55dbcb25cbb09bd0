//! Prompt file access.
//!
//! The file is JSON with two string arrays:
//!
//! ```json
//! { "questions": ["..."], "icebreakers": ["..."] }
//! ```

use std::path::PathBuf;

use crate::{
    error::content::ContentError,
    model::prompt::{PromptFile, PromptSet},
};

/// Reads prompt content from a JSON file on disk.
pub struct PromptFileRepository {
    path: PathBuf,
}

impl PromptFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the prompt file.
    ///
    /// Missing keys parse as empty lists; [`PromptSet::new`] then fills in the
    /// fallback for that pool.
    ///
    /// # Returns
    /// - `Ok(PromptSet)` - File parsed
    /// - `Err(ContentError::Read)` - File missing or unreadable
    /// - `Err(ContentError::Parse)` - File is not the expected JSON shape
    pub fn load(&self) -> Result<PromptSet, ContentError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: PromptFile =
            serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if file.questions.is_empty() {
            tracing::warn!(
                "No questions in {}, using fallback question",
                self.path.display()
            );
        }
        if file.icebreakers.is_empty() {
            tracing::warn!(
                "No icebreakers in {}, using fallback icebreaker",
                self.path.display()
            );
        }

        Ok(PromptSet::new(file.questions, file.icebreakers))
    }
}
