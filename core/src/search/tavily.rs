//! Minimal Tavily search client. Results are passed through untouched.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTopic {
    #[default]
    General,
    News,
    Finance,
}

impl SearchTopic {
    pub const ALL: [&'static str; 3] = ["general", "news", "finance"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "general" => Some(Self::General),
            "news" => Some(Self::News),
            "finance" => Some(Self::Finance),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::News => write!(f, "news"),
            Self::Finance => write!(f, "finance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub topic: SearchTopic,
    pub include_raw_content: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 5,
            topic: SearchTopic::General,
            include_raw_content: false,
        }
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn topic(mut self, topic: SearchTopic) -> Self {
        self.topic = topic;
        self
    }

    pub fn include_raw_content(mut self, include: bool) -> Self {
        self.include_raw_content = include;
        self
    }
}

pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.into(),
            base_url: crate::config::DEFAULT_SEARCH_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<serde_json::Value> {
        debug!(query = %request.query, topic = %request.topic, "sending Tavily search");

        let response = self
            .client
            .post(format!("{}/search", self.base_url.trim_end_matches('/')))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Tavily API error {}: {}",
                status,
                error_text
            ));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn request_defaults() {
        let request = SearchRequest::new("rust agents");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "rust agents",
                "max_results": 5,
                "topic": "general",
                "include_raw_content": false
            })
        );
    }

    #[test]
    fn topics_parse() {
        assert_eq!(SearchTopic::parse("news"), Some(SearchTopic::News));
        assert_eq!(SearchTopic::parse("finance"), Some(SearchTopic::Finance));
        assert_eq!(SearchTopic::parse("sports"), None);
    }

    #[tokio::test]
    async fn posts_request_and_returns_raw_bundle() {
        let server = MockServer::start().await;
        let bundle = json!({
            "query": "ai news",
            "results": [{"title": "t", "url": "https://example.com", "content": "c", "score": 0.9}]
        });

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("Authorization", "Bearer tvly-test"))
            .and(body_json(json!({
                "query": "ai news",
                "max_results": 10,
                "topic": "news",
                "include_raw_content": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(bundle.clone()))
            .mount(&server)
            .await;

        let client = TavilyClient::new("tvly-test").with_base_url(server.uri());
        let request = SearchRequest::new("ai news")
            .max_results(10)
            .topic(SearchTopic::News)
            .include_raw_content(true);

        assert_eq!(client.search(&request).await.unwrap(), bundle);
    }

    #[tokio::test]
    async fn errors_are_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = TavilyClient::new("bad").with_base_url(server.uri());
        let err = client
            .search(&SearchRequest::new("q"))
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("401"));
        assert!(err.contains("invalid api key"));
    }
}
