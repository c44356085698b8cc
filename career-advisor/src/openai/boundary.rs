use async_openai::types::{ChatCompletionRequestMessageArgs, CreateChatCompletionRequestArgs, Role};
use async_trait::async_trait;

use crate::api::{GenerationParams, Result, TextGenerator};

/// Chat completion model used as a plain text generator
pub struct Client {
    client: async_openai::Client,
    model: String,
}

impl Client {
    pub fn new(api_key: String, api_base: Option<String>, model: String) -> Self {
        let mut client = async_openai::Client::new().with_api_key(api_key);
        if let Some(api_base) = api_base {
            client = client.with_api_base(api_base);
        }
        Self { client, model }
    }
}

#[async_trait]
impl TextGenerator for Client {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Vec<String>> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .max_tokens(params.max_length)
            .n(params.num_return_sequences)
            .messages([ChatCompletionRequestMessageArgs::default()
                .role(Role::User)
                .content(prompt)
                .build()?])
            .build()?;
        let chat_completion = self.client.chat().create(request).await?;
        log::debug!("OpenAI response: {:?}", chat_completion);
        Ok(chat_completion
            .choices
            .into_iter()
            .map(|choice| choice.message.content)
            .collect())
    }
}
