//! Chat messages sent to the completion service
//!
//! Messages are assembled per call from a role prompt and the text the
//! agent was given. Conversation history is kept separately, as plain lines
//! in the session state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Role prompt of a specialist
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name shared by the OpenAI and Ollama chat APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// `messages` preceded by a system message carrying `role_prompt`
    pub fn with_role_prompt(role_prompt: &str, messages: &[Message]) -> Vec<Message> {
        std::iter::once(Message::system(role_prompt))
            .chain(messages.iter().cloned())
            .collect()
    }
}
