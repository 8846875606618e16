pub mod agent;
pub mod config;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod search;
pub mod todo;
pub mod tools;
pub mod traits;

pub use agent::{AgentKind, AgentLoop, ContextBuilder, ToolRegistry};
pub use config::*;
pub use pipeline::{PipelineOutcome, PlanningPipeline};
pub use providers::*;
pub use search::*;
pub use todo::TodoRow;
pub use tools::*;
pub use traits::*;
