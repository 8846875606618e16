//! Plan-then-answer run: the model first writes a plan with a TODO table,
//! then answers with that plan in hand. The TODO table is re-rendered locally
//! as a progress table instead of being asked for again.

use crate::config::PipelineConfig;
use crate::prompts::{ANSWER_PROMPT, PLANNING_PROMPT};
use crate::todo::{self, TodoRow};
use crate::traits::{ChatMessage, ChatRequest, Provider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub plan: String,
    pub todos: Vec<TodoRow>,
    pub progress_table: String,
    pub answer: String,
}

impl PipelineOutcome {
    /// The progress table followed by the model's answer sections.
    pub fn report(&self) -> String {
        format!(
            "## TODO Progress\n\n{}\n\n\n{}",
            self.progress_table, self.answer
        )
    }
}

/// Phase 1 result: the raw plan and the progress table derived from it.
struct PlanOutcome {
    plan: String,
    todos: Vec<TodoRow>,
    progress_table: String,
}

pub struct PlanningPipeline {
    provider: Arc<dyn Provider>,
    planning_prompt: String,
    answer_prompt: String,
    section_marker: String,
    status_override: Option<String>,
}

impl PlanningPipeline {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        let defaults = PipelineConfig::default();
        Self {
            provider,
            planning_prompt: PLANNING_PROMPT.to_string(),
            answer_prompt: ANSWER_PROMPT.to_string(),
            section_marker: defaults.section_marker,
            status_override: defaults.status_override,
        }
    }

    pub fn from_config(provider: Arc<dyn Provider>, config: &PipelineConfig) -> Self {
        Self::new(provider)
            .with_section_marker(config.section_marker.clone())
            .with_status_override(config.status_override.clone())
    }

    pub fn with_prompts(
        mut self,
        planning_prompt: impl Into<String>,
        answer_prompt: impl Into<String>,
    ) -> Self {
        self.planning_prompt = planning_prompt.into();
        self.answer_prompt = answer_prompt.into();
        self
    }

    pub fn with_section_marker(mut self, marker: impl Into<String>) -> Self {
        self.section_marker = marker.into();
        self
    }

    pub fn with_status_override(mut self, status: Option<String>) -> Self {
        self.status_override = status;
        self
    }

    async fn plan(&self, question: &str) -> Result<PlanOutcome> {
        let planning_messages = [
            ChatMessage::system(&self.planning_prompt),
            ChatMessage::user(question),
        ];
        let plan = self.ask(&planning_messages).await?;

        let table = todo::isolate_table_lines(&todo::extract_section(&plan, &self.section_marker));
        let todos = todo::parse_table(&table);
        if todos.is_empty() {
            warn!(marker = %self.section_marker, "no TODO rows found in plan");
        } else {
            info!(rows = todos.len(), "parsed TODO table from plan");
        }

        let progress_table = todo::render_table(&todos, self.status_override.as_deref());
        Ok(PlanOutcome {
            plan,
            todos,
            progress_table,
        })
    }

    pub async fn run(&self, question: &str) -> Result<PipelineOutcome> {
        let PlanOutcome {
            plan,
            todos,
            progress_table,
        } = self.plan(question).await?;

        let answer_messages = [
            ChatMessage::system(&self.answer_prompt),
            ChatMessage::user(combined_prompt(question, &plan)),
        ];
        let answer = self.ask(&answer_messages).await?;

        Ok(PipelineOutcome {
            plan,
            todos,
            progress_table,
            answer,
        })
    }

    async fn ask(&self, messages: &[ChatMessage]) -> Result<String> {
        let response = self.provider.chat(ChatRequest::new(messages)).await?;
        Ok(response.text.unwrap_or_default())
    }
}

fn combined_prompt(question: &str, plan: &str) -> String {
    format!(
        "\nUser question:\n{}\n\nReasoning Plan and TODOs from Phase 1:\n{}\n",
        question, plan
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::ScriptedProvider;
    use crate::todo::EMPTY_TABLE_PLACEHOLDER;
    use crate::traits::ChatResponse;

    const PLAN: &str = "## Reasoning Plan\n- Step 1: scope\n\n\
                        ## TODO List\n\
                        | ID | Task | Owner (Role) | Depends On | Status | Notes |\n\
                        | --- | --- | --- | --- | --- | --- |\n\
                        | T1 | Inventory repos | requirements-analyst | - | todo | 20 services |\n\
                        | T2 | Draft workflow | pipeline-architect | T1 | todo | reusable |\n\n\
                        ## Sub-Agent Plan\n- delegate T2";

    const ANSWER: &str = "## Context\n- 10 people, 20 services";

    fn provider(plan: &str) -> Arc<ScriptedProvider> {
        Arc::new(ScriptedProvider::new([
            Ok(ChatResponse::text(plan)),
            Ok(ChatResponse::text(ANSWER)),
        ]))
    }

    #[tokio::test]
    async fn marks_todos_done_and_feeds_plan_back() {
        let provider = provider(PLAN);
        let outcome = PlanningPipeline::new(provider.clone())
            .run("How should we do CI/CD?")
            .await
            .unwrap();

        assert_eq!(outcome.plan, PLAN);
        assert_eq!(outcome.todos.len(), 2);
        assert_eq!(outcome.todos[1].get("Status"), Some("todo"));
        assert_eq!(
            outcome.progress_table,
            "| ID | Task | Owner (Role) | Depends On | Status | Notes |\n\
             | --- | --- | --- | --- | --- | --- |\n\
             | T1 | Inventory repos | requirements-analyst | - | done | 20 services |\n\
             | T2 | Draft workflow | pipeline-architect | T1 | done | reusable |"
        );
        assert_eq!(outcome.answer, ANSWER);

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0][0].content, PLANNING_PROMPT);
        assert_eq!(requests[0][1].content, "How should we do CI/CD?");
        assert_eq!(requests[1][0].content, ANSWER_PROMPT);
        assert_eq!(
            requests[1][1].content,
            format!(
                "\nUser question:\nHow should we do CI/CD?\n\nReasoning Plan and TODOs from Phase 1:\n{}\n",
                PLAN
            )
        );
    }

    #[tokio::test]
    async fn report_puts_progress_before_answer() {
        let outcome = PlanningPipeline::new(provider(PLAN)).run("q").await.unwrap();
        let report = outcome.report();

        assert!(report.starts_with("## TODO Progress\n\n| ID |"));
        assert!(report.ends_with(&format!("| reusable |\n\n\n{}", ANSWER)));
    }

    #[tokio::test]
    async fn missing_table_degrades_to_placeholder() {
        let outcome = PlanningPipeline::new(provider("## Reasoning Plan\n- just words"))
            .run("q")
            .await
            .unwrap();

        assert!(outcome.todos.is_empty());
        assert_eq!(outcome.progress_table, EMPTY_TABLE_PLACEHOLDER);
        assert_eq!(outcome.answer, ANSWER);
    }

    #[tokio::test]
    async fn empty_plan_reply_still_reaches_phase_two() {
        let provider = Arc::new(ScriptedProvider::new([
            Ok(ChatResponse::default()),
            Ok(ChatResponse::text(ANSWER)),
        ]));

        let outcome = PlanningPipeline::new(provider.clone())
            .run("q")
            .await
            .unwrap();

        assert_eq!(outcome.plan, "");
        assert!(outcome.todos.is_empty());
        assert_eq!(outcome.progress_table, EMPTY_TABLE_PLACEHOLDER);
        assert_eq!(outcome.answer, ANSWER);
        assert_eq!(
            provider.requests()[1][1].content,
            "\nUser question:\nq\n\nReasoning Plan and TODOs from Phase 1:\n\n"
        );
    }

    #[tokio::test]
    async fn without_override_statuses_are_kept() {
        let outcome = PlanningPipeline::new(provider(PLAN))
            .with_status_override(None)
            .run("q")
            .await
            .unwrap();

        assert!(outcome.progress_table.contains("| - | todo |"));
        assert!(!outcome.progress_table.contains("done"));
    }

    #[tokio::test]
    async fn custom_marker_is_honoured() {
        let plan = PLAN.replace("## TODO List", "## Task Board");
        let config = PipelineConfig {
            section_marker: "## Task Board".to_string(),
            status_override: Some("complete".to_string()),
            ..PipelineConfig::default()
        };

        let outcome = PlanningPipeline::from_config(provider(&plan), &config)
            .run("q")
            .await
            .unwrap();

        assert_eq!(outcome.todos.len(), 2);
        assert!(outcome.progress_table.contains("| complete |"));
    }

    #[tokio::test]
    async fn model_failure_stops_the_run() {
        let provider = Arc::new(ScriptedProvider::new([
            Ok(ChatResponse::text(PLAN)),
            Err(anyhow::anyhow!("Gemini API error 429: quota")),
        ]));

        let err = PlanningPipeline::new(provider).run("q").await.unwrap_err();
        assert_eq!(err.to_string(), "Gemini API error 429: quota");
    }
}
