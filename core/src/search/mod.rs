pub mod tavily;

pub use tavily::{SearchRequest, SearchTopic, TavilyClient};

pub const TAVILY_KEY_VARS: &[&str] = &["TAVILY_API_KEY", "DEEPLINE_TAVILY_API_KEY"];

use crate::config::SearchConfig;
use crate::providers::resolve_api_key_with_fallback;
use anyhow::Result;

pub fn create_search_client(config: &SearchConfig) -> Result<TavilyClient> {
    let api_key = resolve_api_key_with_fallback(TAVILY_KEY_VARS, &config.api_key)?;
    Ok(TavilyClient::new(api_key).with_base_url(config.base_url.clone()))
}
