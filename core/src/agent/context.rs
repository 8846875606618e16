use crate::traits::ChatMessage;

/// Assembles the system prompt for an agent run: the preset instructions
/// followed by a short runtime block.
pub struct ContextBuilder {
    instructions: String,
}

impl ContextBuilder {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }

    pub fn build_system_prompt(&self) -> String {
        let runtime = self.get_runtime_context();
        [self.instructions.trim_end(), runtime.as_str()].join("\n\n---\n\n")
    }

    fn get_runtime_context(&self) -> String {
        let date = chrono::Local::now().format("%Y-%m-%d (%A)");

        format!("## Runtime Context\n\n### Current Date\n{}", date)
    }

    pub fn build_messages(&self, current_message: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.build_system_prompt()),
            ChatMessage::user(current_message),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_runtime_context() {
        let prompt = ContextBuilder::new("You are a researcher.\n").build_system_prompt();
        assert!(prompt.starts_with("You are a researcher.\n\n---\n\n## Runtime Context"));
        assert!(prompt.contains("### Current Date"));
    }

    #[test]
    fn messages_are_system_then_user() {
        let messages = ContextBuilder::new("sys").build_messages("question");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1], ChatMessage::user("question"));
    }
}
