//! Bundle orchestration and coordination.
//!
//! - [`orchestrator`] - Main [`Bundler`] struct running the pipeline
//! - [`tool_detection`] - Locating external tools before they are spawned

mod orchestrator;
pub(crate) mod tool_detection;

pub use orchestrator::Bundler;
