use anyhow::{Context, Result};
use console::style;
use deepline_core::config::Config;
use dialoguer::{Input, Select};

const PROVIDERS: &[(&str, &str)] = &[
    ("gemini", "Google Gemini (GOOGLE_API_KEY)"),
    ("openai", "OpenAI-compatible (OPENAI_API_KEY)"),
];

fn print_step(step: usize, total: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, total, title))
            .cyan()
            .bold()
    );
    println!();
}

fn setup_provider() -> Result<&'static str> {
    let labels: Vec<&str> = PROVIDERS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("Select your model provider")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to select provider")?;

    Ok(PROVIDERS[selection].0)
}

fn models_for(provider: &str) -> &'static [&'static str] {
    match provider {
        "openai" => &["gpt-4o", "gpt-4o-mini"],
        _ => &["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.5-flash-lite"],
    }
}

fn setup_model(provider: &str) -> Result<String> {
    let models = models_for(provider);
    let selection = Select::new()
        .with_prompt("Select your model")
        .items(models)
        .default(0)
        .interact()
        .context("Failed to select model")?;

    Ok(models[selection].to_string())
}

/// Empty input keeps the key out of the config file so the environment
/// variable is used instead.
fn setup_key(prompt: &str) -> Result<String> {
    let key: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read API key")?;

    Ok(key.trim().to_string())
}

pub fn run_onboard() -> Result<Config> {
    println!("  {}", style("Welcome to deepline!").white().bold());
    println!(
        "  {}",
        style("This wizard writes the model and search settings used by every command.").dim()
    );

    print_step(1, 3, "Model Provider");
    let provider = setup_provider()?;
    let model = setup_model(provider)?;

    print_step(2, 3, "API Keys");
    let api_key = setup_key("Model API key (leave empty to read it from the environment)")?;
    let search_key = setup_key("Tavily API key (leave empty to use TAVILY_API_KEY)")?;

    let mut config = Config {
        provider: Some(provider.to_string()),
        api_key,
        model,
        ..Default::default()
    };
    config.search.api_key = search_key;

    print_step(3, 3, "Done");
    println!("  {} Configuration complete!", style("✓").green().bold());
    println!(
        "  {} Config saved to {}",
        style("→").green(),
        style(deepline_core::config::get_config_path().display()).cyan()
    );
    println!(
        "  {} You can now run: {}",
        style("→").green(),
        style("deepline pipeline").cyan().bold()
    );
    println!();

    Ok(config)
}
