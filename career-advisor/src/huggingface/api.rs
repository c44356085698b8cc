use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::api::{Error, GenerationParams, Result};
use crate::config::AdvisorConfig;

const TEXT_GENERATION: &str = "text-generation";

/// Model card as served by the hub, only the fields we check
#[derive(Deserialize, Debug)]
pub(crate) struct ModelInfo {
    pub(crate) id: String,
    pub(crate) pipeline_tag: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct InferenceRequest<'a> {
    pub(crate) inputs: &'a str,
    pub(crate) parameters: InferenceParameters,
    pub(crate) options: InferenceOptions,
}

#[derive(Serialize, Debug)]
pub(crate) struct InferenceParameters {
    pub(crate) max_new_tokens: u16,
    pub(crate) num_return_sequences: u8,
    pub(crate) return_full_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) truncate: Option<u16>,
}

impl From<&GenerationParams> for InferenceParameters {
    fn from(params: &GenerationParams) -> Self {
        Self {
            max_new_tokens: params.max_length,
            num_return_sequences: params.num_return_sequences,
            return_full_text: false,
            truncate: params.truncation.then_some(params.max_length),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct InferenceOptions {
    pub(crate) wait_for_model: bool,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GeneratedText {
    pub(crate) generated_text: String,
}

/// A text-generation model hosted behind the Hugging Face inference api
pub struct Client {
    client: reqwest::Client,
    inference_url: String,
    model: String,
    token: Option<String>,
}

impl Client {
    /// Looks the model up on the hub first, so a misspelled or non-generative
    /// model is rejected at startup instead of on the first question.
    pub async fn load(client: reqwest::Client, config: &AdvisorConfig) -> Result<Self> {
        let hf = Self {
            client,
            inference_url: config.inference_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            token: config.hf_token.clone(),
        };
        let info = hf.model_info(&config.hub_url).await?;
        match info.pipeline_tag.as_deref() {
            Some(TEXT_GENERATION) => {}
            Some(other) => return Err(Error::UnsupportedModel(info.id, other.to_owned())),
            None => log::warn!(
                "model {} has no pipeline tag, assuming {}",
                info.id,
                TEXT_GENERATION
            ),
        }
        log::info!("loaded text-generation model: {}", info.id);
        Ok(hf)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn model_info(&self, hub_url: &str) -> Result<ModelInfo> {
        let url = format!("{}/api/models/{}", hub_url.trim_end_matches('/'), self.model);
        log::debug!("GET {}", url);
        let resp = self.authorized(self.client.get(&url)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::RequestNotOk(status, body));
        }
        Ok(resp.json().await?)
    }

    pub(crate) async fn infer(&self, request: &InferenceRequest<'_>) -> Result<Vec<GeneratedText>> {
        let url = format!("{}/models/{}", self.inference_url, self.model);
        log::debug!("POST {}", url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::error!("Inference request not successful, status code: {}", status);
            return Err(Error::RequestNotOk(status, body));
        }
        Ok(resp.json().await?)
    }
}
