//! Role-prompt specialist: one system message, one completion

use std::sync::Arc;

use crate::agents::domain::{AgentKind, Message};
use crate::agents::error::AgentResult;
use crate::agents::llm::LlmProvider;

/// Specialist that answers with a single completion under its role prompt
pub struct PromptedAgent {
    kind: AgentKind,
    role_prompt: String,
    llm: Arc<dyn LlmProvider>,
}

impl PromptedAgent {
    pub fn new(kind: AgentKind, role_prompt: impl Into<String>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            kind,
            role_prompt: role_prompt.into(),
            llm,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn role_prompt(&self) -> &str {
        &self.role_prompt
    }

    /// Prepend the role prompt and return the completion text unchanged
    pub async fn invoke(&self, messages: &[Message]) -> AgentResult<String> {
        let messages = Message::with_role_prompt(&self.role_prompt, messages);
        Ok(self.llm.complete_text(messages, None).await?)
    }
}
