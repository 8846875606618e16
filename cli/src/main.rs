use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use deepline_core::{AgentKind, PlanningPipeline, config, prompts, providers, search, todo};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod onboard;

const RULE_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "deepline")]
#[command(about = "deepline - research agents and plan-then-answer runs on hosted LLMs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print model output as plain text instead of rendered Markdown.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write ~/.deepline/config.toml interactively.
    Onboard,
    /// List the available agent presets.
    Agents,
    /// Run an agent preset with its tools.
    Agent {
        /// quickstart, research, news, finance, custom, comparative or tutorial
        kind: AgentKind,
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Ask for a plan with a TODO table, then for the final answer.
    Pipeline {
        #[arg(short, long)]
        question: Option<String>,
        /// Status written into every TODO row of the progress table.
        #[arg(short, long)]
        status: Option<String>,
        /// Keep the statuses the model wrote.
        #[arg(long, conflicts_with = "status")]
        keep_status: bool,
    },
    /// Re-render the TODO table found in a Markdown file (or stdin).
    Todo {
        file: Option<PathBuf>,
        #[arg(short, long)]
        status: Option<String>,
        #[arg(short, long, default_value = todo::DEFAULT_SECTION_MARKER)]
        marker: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_markdown(text: &str, plain: bool) {
    if plain {
        println!("{}", text);
    } else {
        termimad::print_text(text);
    }
}

fn print_agents() {
    println!("Available agents:");
    for kind in AgentKind::ALL {
        let note = if kind.default_query().is_some() {
            ""
        } else {
            " (requires --query)"
        };
        println!("  deepline agent {:<12}{}", kind.name(), note);
    }
    println!("  deepline pipeline           - plan, TODO progress and final answer");
}

async fn run_agent(kind: AgentKind, query: Option<String>, plain: bool) -> Result<()> {
    let config = config::Config::load_or_init()?;

    let query = query
        .or_else(|| kind.default_query().map(str::to_string))
        .ok_or_else(|| anyhow::anyhow!("The '{}' agent needs a --query", kind))?;

    let provider = providers::create_provider(&config, config.agent_settings())?;
    let search = Arc::new(search::create_search_client(&config.search)?);
    let agent = kind.build(provider, search, config.max_iterations);

    info!(agent = %kind, model = %config.model, "running agent");
    println!("Researching: {}", query);
    println!("{}", "-".repeat(RULE_WIDTH));

    let response = agent.process(&query).await?;

    print_banner(kind.title());
    print_markdown(&response, plain);
    println!();
    Ok(())
}

async fn run_pipeline(question: Option<String>, status: Option<String>, keep_status: bool, plain: bool) -> Result<()> {
    let config = config::Config::load_or_init()?;
    let question = question.unwrap_or_else(|| prompts::DEVOPS_QUESTION.to_string());

    let status_override = if keep_status {
        None
    } else {
        status.or_else(|| config.pipeline.status_override.clone())
    };

    let provider = providers::create_provider(&config, config.pipeline_settings())?;
    let pipeline = PlanningPipeline::from_config(provider, &config.pipeline)
        .with_status_override(status_override);

    let outcome = pipeline.run(&question).await?;

    println!("\n=== PHASE 1: REASONING PLAN + TODOs ===\n");
    print_markdown(&outcome.plan, plain);
    println!("\n=== END PLAN ===\n");

    println!("\n=== PHASE 2: FINAL ANSWER (WITH TODO PROGRESS) ===\n");
    print_markdown(&outcome.report(), plain);
    println!("\n=== END ANSWER ===");
    Ok(())
}

fn run_todo(file: Option<PathBuf>, status: Option<String>, marker: &str) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let rows = todo::parse_table(&todo::isolate_table_lines(&todo::extract_section(&text, marker)));
    println!("{}", todo::render_table(&rows, status.as_deref()));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or_else(|| {
        if !config::config_exists() {
            Commands::Onboard
        } else {
            Commands::Agents
        }
    });

    match command {
        Commands::Onboard => {
            let onboard_config = onboard::run_onboard().map_err(|e| {
                eprintln!("❌ Onboarding failed: {}", e);
                anyhow::anyhow!("Onboarding failed: {}", e)
            })?;
            config::save_config(&onboard_config)?;
        }
        Commands::Agents => print_agents(),
        Commands::Agent { kind, query } => run_agent(kind, query, cli.plain).await?,
        Commands::Pipeline {
            question,
            status,
            keep_status,
        } => run_pipeline(question, status, keep_status, cli.plain).await?,
        Commands::Todo {
            file,
            status,
            marker,
        } => run_todo(file, status, &marker)?,
    }

    Ok(())
}
