use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

const MAX_CHARS: usize = 2000;

pub struct UrlFetcherTool {
    client: reqwest::Client,
}

impl Default for UrlFetcherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlFetcherTool {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let response = self.client.get(url).send().await?;
        debug!(url, status = %response.status(), "fetched url");
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Tool for UrlFetcherTool {
    fn name(&self) -> &str {
        "url_fetcher"
    }

    fn description(&self) -> &str {
        "Fetch and process content from a specific URL"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL to fetch"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let url = extract_string_arg(&args, "url")?;

        match self.fetch(&url).await {
            Ok(body) => Ok(ToolResult::success(
                body.chars().take(MAX_CHARS).collect::<String>(),
            )),
            Err(e) => Ok(ToolResult::error(format!("Error fetching URL: {}", e))),
        }
    }
}
