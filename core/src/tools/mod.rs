use serde_json::Value;

pub mod calculate_metrics;
pub mod search;
pub mod text_summarizer;
pub mod url_fetcher;

pub use calculate_metrics::CalculateMetricsTool;
pub use search::SearchTool;
pub use text_summarizer::TextSummarizerTool;
pub use url_fetcher::UrlFetcherTool;

pub fn extract_string_arg(args: &Value, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' parameter", key))
        .map(|s| s.to_string())
}

pub fn extract_string_arg_opt(args: &Value, key: &str, default: &str) -> String {
    args.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
        .to_string()
}

pub fn extract_usize_arg_opt(args: &Value, key: &str, default: usize) -> usize {
    args.get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as usize)
        .unwrap_or(default)
}

pub fn extract_bool_arg_opt(args: &Value, key: &str, default: bool) -> bool {
    args.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_args_fall_back() {
        let args = json!({"query": "q", "max_results": 3, "flag": true});
        assert_eq!(extract_string_arg(&args, "query").unwrap(), "q");
        assert!(extract_string_arg(&args, "url").is_err());
        assert_eq!(extract_string_arg_opt(&args, "topic", "general"), "general");
        assert_eq!(extract_usize_arg_opt(&args, "max_results", 5), 3);
        assert_eq!(extract_usize_arg_opt(&args, "max_length", 100), 100);
        assert!(extract_bool_arg_opt(&args, "flag", false));
        assert!(!extract_bool_arg_opt(&args, "missing", false));
    }
}
