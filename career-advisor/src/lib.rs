pub mod advisor;
pub mod api;
pub mod config;
pub mod huggingface;
pub mod openai;
pub mod prompt;

pub use advisor::{Advisor, MODEL_UNAVAILABLE};
pub use api::{Error, GenerationParams, Result, TextGenerator};
pub use config::{AdvisorConfig, Backend};
pub use prompt::advice_prompt;
