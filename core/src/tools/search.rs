use crate::search::{SearchRequest, SearchTopic, TavilyClient};
use crate::tools::{extract_bool_arg_opt, extract_string_arg, extract_string_arg_opt, extract_usize_arg_opt};
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// A web search tool backed by Tavily. Presets fix some request options and
/// expose the rest to the model.
pub struct SearchTool {
    client: Arc<TavilyClient>,
    name: &'static str,
    description: &'static str,
    default_max_results: usize,
    topic: Option<SearchTopic>,
    include_raw_content: Option<bool>,
}

impl SearchTool {
    /// `internet_search` with every option exposed.
    pub fn internet(client: Arc<TavilyClient>) -> Self {
        Self {
            client,
            name: "internet_search",
            description: "Run a web search with flexible parameters",
            default_max_results: 5,
            topic: None,
            include_raw_content: None,
        }
    }

    /// `internet_search` taking only a query and a result count.
    pub fn basic(client: Arc<TavilyClient>) -> Self {
        Self {
            client,
            name: "internet_search",
            description: "Search the web",
            default_max_results: 5,
            topic: Some(SearchTopic::General),
            include_raw_content: Some(false),
        }
    }

    pub fn news(client: Arc<TavilyClient>) -> Self {
        Self {
            client,
            name: "news_search",
            description: "Specialized search for current news",
            default_max_results: 10,
            topic: Some(SearchTopic::News),
            include_raw_content: Some(true),
        }
    }

    pub fn finance(client: Arc<TavilyClient>) -> Self {
        Self {
            client,
            name: "finance_search",
            description: "Specialized financial search",
            default_max_results: 10,
            topic: Some(SearchTopic::Finance),
            include_raw_content: Some(true),
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn parameters_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        properties.insert(
            "query".into(),
            json!({"type": "string", "description": "The search query string"}),
        );
        properties.insert(
            "max_results".into(),
            json!({
                "type": "integer",
                "description": format!("Maximum number of results to return (default: {})", self.default_max_results)
            }),
        );
        if self.topic.is_none() {
            properties.insert(
                "topic".into(),
                json!({
                    "type": "string",
                    "enum": SearchTopic::ALL,
                    "description": "Search topic category (default: general)"
                }),
            );
        }
        if self.include_raw_content.is_none() {
            properties.insert(
                "include_raw_content".into(),
                json!({
                    "type": "boolean",
                    "description": "Whether to include the raw page content (default: false)"
                }),
            );
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": ["query"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let query = extract_string_arg(&args, "query")?;

        let topic = match self.topic {
            Some(topic) => topic,
            None => {
                let raw = extract_string_arg_opt(&args, "topic", "general");
                match SearchTopic::parse(&raw) {
                    Some(topic) => topic,
                    None => {
                        return Ok(ToolResult::error(format!(
                            "Invalid topic '{}'. Expected one of: {}",
                            raw,
                            SearchTopic::ALL.join(", ")
                        )));
                    }
                }
            }
        };

        let include_raw_content = self
            .include_raw_content
            .unwrap_or_else(|| extract_bool_arg_opt(&args, "include_raw_content", false));

        let request = SearchRequest::new(query)
            .max_results(extract_usize_arg_opt(&args, "max_results", self.default_max_results))
            .topic(topic)
            .include_raw_content(include_raw_content);

        let results = self.client.search(&request).await?;
        Ok(ToolResult::success(results.to_string()))
    }
}
