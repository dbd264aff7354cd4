//! Router/aggregator: select specialists, run them, synthesize one answer

use std::sync::Arc;

use super::keywords::select_agents;
use crate::agents::core::AgentRoster;
use crate::agents::domain::Message;
use crate::agents::error::AgentResult;
use crate::agents::llm::LlmProvider;
use crate::agents::memory::ConversationState;

/// Routes a free-text message to the matching specialists and merges their
/// outputs with one synthesis completion.
pub struct Router {
    roster: Arc<AgentRoster>,
    llm: Arc<dyn LlmProvider>,
    synthesis_max_tokens: u32,
}

impl Router {
    pub fn new(roster: Arc<AgentRoster>, llm: Arc<dyn LlmProvider>, synthesis_max_tokens: u32) -> Self {
        Self {
            roster,
            llm,
            synthesis_max_tokens,
        }
    }

    /// Answer one user message.
    ///
    /// Per-agent failures become text in the agent's slot and never stop the
    /// others; a failing synthesis call fails the whole request.
    pub async fn invoke(
        &self,
        text: &str,
        thread_id: &str,
        state: &mut ConversationState,
    ) -> AgentResult<String> {
        state.record_user_message(text);

        let selected = select_agents(text);
        tracing::info!(
            agents = ?selected.iter().map(|k| k.name()).collect::<Vec<_>>(),
            "agents selected"
        );

        let mut outputs = Vec::with_capacity(selected.len());
        for kind in selected {
            let name = kind.name();
            let Some(agent) = self.roster.get(kind) else {
                outputs.push(format!("{} Agent not found.", name));
                continue;
            };

            let message = Message::user(format!(
                "Known trip data: {}\nUser: {}",
                state.trip_facts_summary(),
                text
            ));
            match agent.invoke(&[message], thread_id, state).await {
                Ok(result) => outputs.push(format!("{} says:\n{}", name, result)),
                Err(e) => {
                    tracing::warn!(agent = name, error = %e, "agent failed");
                    outputs.push(format!("Error in {}: {}", name, e));
                }
            }
        }

        let prompt = synthesis_prompt(text, &outputs, &state.trip_facts_summary());
        let answer = self
            .llm
            .complete_text(vec![Message::user(prompt)], Some(self.synthesis_max_tokens))
            .await?;

        state.record_assistant_message(&answer);
        Ok(answer)
    }
}

/// Final prompt merging every agent's labeled output
pub fn synthesis_prompt(text: &str, outputs: &[String], summary: &str) -> String {
    format!(
        "User asked: {}\nHere are the agent outputs:\n{}\nUse known trip data: {}\nCombine them into a single helpful answer.",
        text,
        outputs.join("\n"),
        summary
    )
}
