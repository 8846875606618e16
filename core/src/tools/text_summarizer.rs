use crate::tools::{extract_string_arg, extract_usize_arg_opt};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

const DEFAULT_MAX_LENGTH: usize = 100;

pub struct TextSummarizerTool;

/// Takes whole `.`-separated sentences until the summary reaches
/// `max_length` characters. The last sentence may overshoot the limit.
pub fn summarize(text: &str, max_length: usize) -> String {
    let mut summary = String::new();

    for sentence in text.split('.') {
        if summary.chars().count() >= max_length {
            break;
        }
        summary.push_str(sentence);
        summary.push_str(". ");
    }

    summary
}

#[async_trait]
impl Tool for TextSummarizerTool {
    fn name(&self) -> &str {
        "text_summarizer"
    }

    fn description(&self) -> &str {
        "Summarize text to specified length"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to condense"
                },
                "max_length": {
                    "type": "integer",
                    "description": "Approximate maximum summary length in characters (default: 100)"
                }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let text = extract_string_arg(&args, "text")?;
        let max_length = extract_usize_arg_opt(&args, "max_length", DEFAULT_MAX_LENGTH);

        Ok(ToolResult::success(summarize(&text, max_length)))
    }
}
