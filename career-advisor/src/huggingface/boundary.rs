use async_trait::async_trait;

use crate::api::{GenerationParams, Result, TextGenerator};
use crate::huggingface::api::{Client, InferenceOptions, InferenceRequest};

#[async_trait]
impl TextGenerator for Client {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: params.into(),
            options: InferenceOptions {
                wait_for_model: true,
            },
        };
        let generated = self.infer(&request).await?;
        log::debug!(
            "model {} returned {} sequences",
            self.model(),
            generated.len()
        );
        Ok(generated
            .into_iter()
            .map(|sequence| sequence.generated_text)
            .collect())
    }
}
