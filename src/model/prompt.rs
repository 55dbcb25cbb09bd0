//! Prompt content posted into quiet channels.

use serde::Deserialize;

/// Prompt used when the content file yields no general questions.
pub const FALLBACK_QUESTION: &str = "What's on your mind today?";
/// Prompt used when the content file yields no icebreakers.
pub const FALLBACK_ICEBREAKER: &str = "How's everyone doing?";

/// The two prompt pools, replaced wholesale on reload.
///
/// Both pools are guaranteed non-empty once constructed through
/// [`PromptSet::new`] or [`PromptSet::fallback`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSet {
    questions: Vec<String>,
    icebreakers: Vec<String>,
}

impl PromptSet {
    /// Creates a prompt set, substituting the fallback for any empty pool.
    pub fn new(questions: Vec<String>, icebreakers: Vec<String>) -> Self {
        let questions = if questions.is_empty() {
            vec![FALLBACK_QUESTION.to_string()]
        } else {
            questions
        };
        let icebreakers = if icebreakers.is_empty() {
            vec![FALLBACK_ICEBREAKER.to_string()]
        } else {
            icebreakers
        };

        Self {
            questions,
            icebreakers,
        }
    }

    /// One fallback prompt per pool.
    pub fn fallback() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn icebreakers(&self) -> &[String] {
        &self.icebreakers
    }

    /// Every prompt from both pools, questions first.
    pub fn all(&self) -> Vec<&str> {
        self.questions
            .iter()
            .chain(self.icebreakers.iter())
            .map(String::as_str)
            .collect()
    }
}

/// On-disk shape of the prompt file.
///
/// Missing keys deserialize as empty lists so a partial file still loads.
#[derive(Debug, Default, Deserialize)]
pub struct PromptFile {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub icebreakers: Vec<String>,
}
