use crate::api::{Error, GenerationParams, Result, TextGenerator};
use crate::config::{AdvisorConfig, Backend};
use crate::prompt::{advice_prompt, strip_prompt};
use crate::{huggingface, openai};

pub const MODEL_UNAVAILABLE: &str =
    "AI model is not available. Please check your model backend configuration.";

/// Holds the model handle, loaded once at startup.
/// A failed load leaves the advisor unavailable rather than failing the caller.
pub struct Advisor {
    generator: Option<Box<dyn TextGenerator>>,
    params: GenerationParams,
}

impl Advisor {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            params: GenerationParams::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            generator: None,
            params: GenerationParams::default(),
        }
    }

    pub async fn load(client: reqwest::Client, config: &AdvisorConfig) -> Self {
        match load_generator(client, config).await {
            Ok(generator) => Self::new(generator),
            Err(e) => {
                log::error!(
                    "Error initializing {:?} text-generation backend: {}",
                    config.backend,
                    e
                );
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Always returns displayable text: the advice itself or a message describing
    /// why there is none.
    pub async fn get_advice(&self, question: &str) -> String {
        let generator = match &self.generator {
            Some(generator) => generator.as_ref(),
            None => return MODEL_UNAVAILABLE.to_owned(),
        };
        match generate_advice(generator, question, &self.params).await {
            Ok(advice) => advice,
            Err(e) => {
                log::error!("Error generating advice: {}", e);
                format!("Error generating advice: {}", e)
            }
        }
    }
}

async fn load_generator(
    client: reqwest::Client,
    config: &AdvisorConfig,
) -> Result<Box<dyn TextGenerator>> {
    match config.backend {
        Backend::HuggingFace => Ok(Box::new(huggingface::Client::load(client, config).await?)),
        Backend::OpenAi => {
            let api_key = config
                .openai_api_key
                .clone()
                .ok_or(Error::MissingEnv("OPENAI_API_KEY"))?;
            Ok(Box::new(openai::Client::new(
                api_key,
                config.openai_api_base.clone(),
                config.model.clone(),
            )))
        }
    }
}

async fn generate_advice(
    generator: &dyn TextGenerator,
    question: &str,
    params: &GenerationParams,
) -> Result<String> {
    let prompt = advice_prompt(question);
    log::debug!("Prompt: {}", prompt);
    let sequences = generator.generate(&prompt, params).await?;
    let first = sequences.first().ok_or(Error::EmptyResponse)?;
    let advice = strip_prompt(first, &prompt);
    if advice.is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(advice.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replies with fixed sequences and remembers what it was asked.
    struct CannedGenerator {
        reply: Vec<String>,
        seen: Mutex<Vec<(String, GenerationParams)>>,
    }

    impl CannedGenerator {
        fn new(reply: Vec<String>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>> {
            self.seen.lock().unwrap().push((prompt.to_owned(), *params));
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _params: &GenerationParams) -> Result<Vec<String>> {
            Err(Error::UnsupportedModel("bert".to_owned(), "fill-mask".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_unavailable_advisor() {
        let advisor = Advisor::unavailable();
        assert!(!advisor.is_available());
        assert_eq!(advisor.get_advice("anything").await, MODEL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_advice_excludes_echoed_prompt() {
        let question = "How do I negotiate salary?";
        let echoed = format!("{}\nResearch market rates first.", advice_prompt(question));
        let advisor = Advisor::new(Box::new(CannedGenerator::new(vec![echoed])));

        let advice = advisor.get_advice(question).await;
        assert_eq!(advice, "Research market rates first.");
    }

    #[async_trait]
    impl TextGenerator for Arc<CannedGenerator> {
        async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>> {
            self.as_ref().generate(prompt, params).await
        }
    }

    #[tokio::test]
    async fn test_generator_receives_prompt_and_fixed_params() {
        let generator = Arc::new(CannedGenerator::new(vec!["ok".to_owned()]));
        let advisor = Advisor::new(Box::new(generator.clone()));

        advisor.get_advice("Is a bootcamp worth it?").await;

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, advice_prompt("Is a bootcamp worth it?"));
        assert_eq!(seen[0].1.max_length, 500);
        assert_eq!(seen[0].1.num_return_sequences, 1);
    }

    #[tokio::test]
    async fn test_only_first_sequence_is_used() {
        let advisor = Advisor::new(Box::new(CannedGenerator::new(vec![
            "first".to_owned(),
            "second".to_owned(),
        ])));
        assert_eq!(advisor.get_advice("q").await, "first");
    }

    #[tokio::test]
    async fn test_empty_completion_is_an_error() {
        let question = "q";
        let advisor = Advisor::new(Box::new(CannedGenerator::new(vec![advice_prompt(
            question,
        )])));
        assert_eq!(
            advisor.get_advice(question).await,
            "Error generating advice: Model returned an empty response"
        );

        let advisor = Advisor::new(Box::new(CannedGenerator::new(vec![])));
        assert!(advisor
            .get_advice(question)
            .await
            .starts_with("Error generating advice: "));
    }

    #[tokio::test]
    async fn test_generator_error_is_reported() {
        let advisor = Advisor::new(Box::new(FailingGenerator));
        let advice = advisor.get_advice("q").await;
        assert_eq!(
            advice,
            "Error generating advice: Model 'bert' does not support text generation, pipeline: 'fill-mask'"
        );
    }

    #[tokio::test]
    async fn test_openai_backend_requires_api_key() {
        let config = AdvisorConfig {
            backend: Backend::OpenAi,
            ..AdvisorConfig::default()
        };
        let advisor = Advisor::load(reqwest::Client::new(), &config).await;
        assert!(!advisor.is_available());
    }
}
