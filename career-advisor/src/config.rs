use std::str::FromStr;

use crate::api::{Error, Result};

pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HF_MODEL: &str = "gpt2";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    HuggingFace,
    OpenAi,
}

impl Backend {
    pub fn default_model(&self) -> &'static str {
        match self {
            Backend::HuggingFace => DEFAULT_HF_MODEL,
            Backend::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Backend::HuggingFace),
            "openai" => Ok(Backend::OpenAi),
            _ => Err(Error::UnknownBackend(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub backend: Backend,
    pub model: String,
    pub hub_url: String,
    pub inference_url: String,
    pub hf_token: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_base: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            backend: Backend::HuggingFace,
            model: DEFAULT_HF_MODEL.to_owned(),
            hub_url: DEFAULT_HUB_URL.to_owned(),
            inference_url: DEFAULT_INFERENCE_URL.to_owned(),
            hf_token: None,
            openai_api_key: None,
            openai_api_base: None,
        }
    }
}

impl AdvisorConfig {
    /// Only an unknown `ADVISOR_BACKEND` is an error here, missing credentials
    /// are reported when the backend is loaded.
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("ADVISOR_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => Backend::HuggingFace,
        };
        let defaults = Self::default();
        Ok(Self {
            backend,
            model: std::env::var("ADVISOR_MODEL")
                .unwrap_or_else(|_| backend.default_model().to_owned()),
            hub_url: std::env::var("HF_HUB_URL").unwrap_or(defaults.hub_url),
            inference_url: std::env::var("HF_INFERENCE_URL").unwrap_or(defaults.inference_url),
            hf_token: std::env::var("HF_API_TOKEN").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_api_base: std::env::var("OPENAI_API_BASE").ok(),
        })
    }
}
