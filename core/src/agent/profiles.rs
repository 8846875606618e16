//! Ready-made agents: a system prompt, a tool set and an optional demo query.

use crate::agent::{AgentLoop, ContextBuilder, ToolRegistry};
use crate::prompts;
use crate::search::TavilyClient;
use crate::tools::{CalculateMetricsTool, SearchTool, TextSummarizerTool, UrlFetcherTool};
use crate::traits::Provider;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Quickstart,
    Research,
    News,
    Finance,
    Custom,
    Comparative,
    Tutorial,
}

impl AgentKind {
    pub const ALL: [AgentKind; 7] = [
        AgentKind::Quickstart,
        AgentKind::Research,
        AgentKind::News,
        AgentKind::Finance,
        AgentKind::Custom,
        AgentKind::Comparative,
        AgentKind::Tutorial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quickstart => "quickstart",
            Self::Research => "research",
            Self::News => "news",
            Self::Finance => "finance",
            Self::Custom => "custom",
            Self::Comparative => "comparative",
            Self::Tutorial => "tutorial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Quickstart => "QUICKSTART RESEARCH REPORT",
            Self::Research => "COMPREHENSIVE RESEARCH RESULTS",
            Self::News => "NEWS ANALYSIS RESULTS",
            Self::Finance => "FINANCE RESEARCH RESULTS",
            Self::Custom => "CUSTOM TOOLS RESEARCH RESULTS",
            Self::Comparative => "COMPARATIVE ANALYSIS RESULTS",
            Self::Tutorial => "TUTORIAL",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::Quickstart => prompts::QUICKSTART_PROMPT,
            Self::Research => prompts::RESEARCH_PROMPT,
            Self::News => prompts::NEWS_PROMPT,
            Self::Finance => prompts::FINANCE_PROMPT,
            Self::Custom => prompts::CUSTOM_TOOLS_PROMPT,
            Self::Comparative => prompts::COMPARATIVE_PROMPT,
            Self::Tutorial => prompts::TUTORIAL_PROMPT,
        }
    }

    /// Query used when the caller does not supply one.
    pub fn default_query(self) -> Option<&'static str> {
        match self {
            Self::Quickstart => Some("Which are the top 3 Agentic Frameworks?"),
            Self::Research => Some(
                "Research the current state of AI agents, including their applications, limitations, and future trends.",
            ),
            Self::News => Some(
                "Analyze recent developments in artificial intelligence and their implications for the tech industry.",
            ),
            Self::Finance => Some(
                "Research the AI/ML sector trends and identify promising investment opportunities.",
            ),
            Self::Custom | Self::Comparative | Self::Tutorial => None,
        }
    }

    pub fn tool_registry(self, search: Arc<TavilyClient>) -> ToolRegistry {
        let registry = ToolRegistry::new();

        match self {
            Self::Quickstart | Self::Research => {
                registry.with_tool(Arc::new(SearchTool::internet(search)))
            }
            Self::News => registry.with_tool(Arc::new(SearchTool::news(search))),
            Self::Finance => registry
                .with_tool(Arc::new(SearchTool::finance(search)))
                .with_tool(Arc::new(CalculateMetricsTool)),
            Self::Custom => registry
                .with_tool(Arc::new(SearchTool::basic(search)))
                .with_tool(Arc::new(UrlFetcherTool::new()))
                .with_tool(Arc::new(TextSummarizerTool)),
            Self::Comparative | Self::Tutorial => {
                registry.with_tool(Arc::new(SearchTool::basic(search)))
            }
        }
    }

    pub fn build(
        self,
        provider: Arc<dyn Provider>,
        search: Arc<TavilyClient>,
        max_iterations: usize,
    ) -> AgentLoop {
        AgentLoop::new(
            provider,
            ContextBuilder::new(self.system_prompt()),
            Arc::new(self.tool_registry(search)),
        )
        .with_max_iterations(max_iterations)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s.to_lowercase())
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                anyhow::anyhow!("Unknown agent '{}'. Available: {}", s, names.join(", "))
            })
    }
}
