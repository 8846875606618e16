use crate::agent::{ContextBuilder, ToolRegistry};
use crate::traits::{ChatMessage, ChatRequest, Provider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ITERATIONS: usize = 20;
pub const MAX_ITERATIONS_REACHED: &str = "Max iterations reached";

/// Sends the conversation to the provider, runs any tool calls it returns and
/// feeds the results back until the model answers in plain text.
pub struct AgentLoop {
    provider: Arc<dyn Provider>,
    context_builder: ContextBuilder,
    tool_registry: Arc<ToolRegistry>,
    max_iterations: usize,
}

impl AgentLoop {
    pub fn new(
        provider: Arc<dyn Provider>,
        context_builder: ContextBuilder,
        tool_registry: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            provider,
            context_builder,
            tool_registry,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub async fn process(&self, message: &str) -> Result<String> {
        let mut messages = self.context_builder.build_messages(message);
        let tools = self.tool_registry.get_specs();

        for iteration in 1..=self.max_iterations {
            let request = ChatRequest::new(&messages).with_tools(&tools);
            let response = self.provider.chat(request).await?;

            if !response.has_tool_calls() {
                info!(iterations = iteration, "agent finished");
                return Ok(response.text.unwrap_or_default());
            }

            let assistant_text = response.text.clone().unwrap_or_default();
            messages.push(ChatMessage::assistant_with_tool_calls(
                assistant_text,
                response.tool_calls.clone(),
            ));

            for tool_call in &response.tool_calls {
                let args: serde_json::Value =
                    serde_json::from_str(&tool_call.arguments).map_err(|e| {
                        anyhow::anyhow!(
                            "Failed to parse tool arguments for {}: {}",
                            tool_call.name,
                            e
                        )
                    })?;

                debug!(tool = %tool_call.name, "executing tool call");
                let result = self.tool_registry.execute(&tool_call.name, args).await;

                messages.push(ChatMessage::tool_result(
                    tool_call,
                    result.to_model_payload().to_string(),
                ));
            }
        }

        warn!(max_iterations = self.max_iterations, "agent stopped without a final answer");
        Ok(MAX_ITERATIONS_REACHED.to_string())
    }
}
