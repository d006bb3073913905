pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{denoise_reported, run_pipeline, run_pipeline_reported};
pub(crate) use types::NoOpReporter;
pub use types::{DenoiseStage, ProgressReporter};
