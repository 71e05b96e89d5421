//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "check the environment", "plan a scaffold" or
//! "generate a solution".

pub mod environment;
pub mod planner;
pub mod scaffold_service;

pub use environment::{EnvironmentValidator, ResolvedTool};
pub use planner::ScaffoldPlanner;
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
