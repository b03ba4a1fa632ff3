use async_trait::async_trait;
use generate_gateway::{
    Error, Result,
    inference::{InferenceService, RunOptions, RunOutput},
};
use std::sync::{Arc, Mutex};

/// A call observed by [`MockInferenceService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub model: String,
    pub options: RunOptions,
}

/// Mock inference backend for testing
#[derive(Debug, Clone)]
pub struct MockInferenceService {
    pub output: RunOutput,
    pub calls: Arc<Mutex<Vec<RecordedRun>>>,
    pub error: Option<String>,
}

impl MockInferenceService {
    pub fn new() -> Self {
        Self {
            output: RunOutput::default(),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(mut self, response: &str) -> Self {
        self.output = RunOutput {
            response: Some(response.to_string()),
        };
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedRun> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceService for MockInferenceService {
    async fn run(&self, model: &str, options: RunOptions) -> Result<RunOutput> {
        self.calls.lock().unwrap().push(RecordedRun {
            model: model.to_string(),
            options,
        });

        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        Ok(self.output.clone())
    }
}

impl Default for MockInferenceService {
    fn default() -> Self {
        Self::new()
    }
}
