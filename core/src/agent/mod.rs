pub mod context;
pub mod loop_;
pub mod profiles;
pub mod registry;

pub use context::ContextBuilder;
pub use loop_::AgentLoop;
pub use profiles::AgentKind;
pub use registry::ToolRegistry;
