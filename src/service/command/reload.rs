use super::CommandService;
use crate::model::reply::CommandReply;

impl CommandService<'_> {
    /// Reloads the prompt file and reports the new pool sizes.
    pub async fn reload_questions(&self) -> CommandReply {
        let prompts = self.state.prompts.reload().await;

        CommandReply::text(format!(
            "✅ Reloaded {} questions and {} icebreakers!",
            prompts.questions().len(),
            prompts.icebreakers().len()
        ))
    }
}
