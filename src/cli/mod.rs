//! Command line surface
//!
//! - `args` - clap definition of the invocation
//! - `orchestration` - The release workflow behind it

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::{release, run_release, WorkflowResult};
