use crate::traits::{Tool, ToolResult, ToolSpec};
use std::sync::Arc;
use tracing::error;

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn get_specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    /// Runs the named tool. Unknown tools and tool failures come back as
    /// error results so the model can see them.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            return ToolResult::error(format!("Tool '{}' not found", name));
        };

        match tool.execute(args).await {
            Ok(result) => result,
            Err(e) => {
                error!(tool = name, "tool execution failed: {}", e);
                ToolResult::error(format!("Execution failed: {}", e))
            }
        }
    }
}
