pub mod factory;
pub mod gemini;
pub mod openai;

#[cfg(test)]
pub mod mock;

pub use factory::{create_provider, resolve_api_key_with_fallback};
pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;
