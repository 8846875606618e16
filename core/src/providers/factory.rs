use crate::config::{Config, ModelSettings};
use crate::providers::{GeminiProvider, OpenAIProvider};
use crate::traits::Provider;
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub const GEMINI_KEY_VARS: &[&str] = &["GOOGLE_API_KEY", "GEMINI_API_KEY", "DEEPLINE_GOOGLE_API_KEY"];
pub const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "DEEPLINE_OPENAI_API_KEY"];

pub fn create_provider(config: &Config, settings: ModelSettings) -> Result<Arc<dyn Provider>> {
    let provider_name = config.provider.as_deref().unwrap_or("gemini");

    match provider_name.to_lowercase().as_str() {
        "gemini" | "google" => {
            let api_key = resolve_api_key_with_fallback(GEMINI_KEY_VARS, &config.api_key)?;
            let mut provider = GeminiProvider::new(api_key)
                .with_model(config.model.clone())
                .with_temperature(settings.temperature)
                .with_max_output_tokens(settings.max_output_tokens);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Arc::new(provider))
        }
        "openai" => {
            let api_key = resolve_api_key_with_fallback(OPENAI_KEY_VARS, &config.api_key)?;
            let mut provider = OpenAIProvider::new(api_key)
                .with_model(config.model.clone())
                .with_temperature(settings.temperature)
                .with_max_tokens(settings.max_output_tokens);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Arc::new(provider))
        }
        _ => Err(anyhow!(
            "Unknown provider: {}. Available: gemini/google, openai",
            provider_name
        )),
    }
}

/// First non-empty environment variable in `env_vars`, else `config_key`.
pub fn resolve_api_key_with_fallback(env_vars: &[&str], config_key: &str) -> Result<String> {
    for var_name in env_vars {
        if let Ok(key) = std::env::var(var_name)
            && !key.trim().is_empty()
        {
            return Ok(key);
        }
    }
    if !config_key.is_empty() {
        Ok(config_key.to_string())
    } else {
        Err(anyhow!(
            "No API key found. Set one of {} or run 'deepline onboard'.",
            env_vars.join(", ")
        ))
    }
}
