use async_openai::error::OpenAIError;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request not successful, status: {0}, body: '{1}'")]
    RequestNotOk(StatusCode, String),
    #[error("Model '{0}' does not support text generation, pipeline: '{1}'")]
    UnsupportedModel(String, String),
    #[error("Unknown generation backend: '{0}'")]
    UnknownBackend(String),
    #[error("Environment variable not set: '{0}'")]
    MissingEnv(&'static str),
    #[error("OpenAI error: '{0}'")]
    OpenAi(#[from] OpenAIError),
    #[error("Model returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fixed sampling parameters, the same for every advice request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub max_length: u16,
    pub num_return_sequences: u8,
    pub truncation: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 500,
            num_return_sequences: 1,
            truncation: true,
        }
    }
}

/// Trait for producing a continuation of a text prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns one continuation per requested sequence, without the prompt where
    /// the backend allows it.
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>>;
}
