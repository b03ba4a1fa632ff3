mod client;
mod types;

pub use client::{InferenceService, WorkersAiClient};
pub use types::{RunOptions, RunOutput};
