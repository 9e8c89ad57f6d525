//! Chat-completion API client
//!
//! Speaks the OpenAI `/chat/completions` wire format. Any server that
//! implements it can be targeted through `openai.base_url` in the config.

use super::models::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};
use super::ChatCompletion;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    const USER_AGENT: &'static str = concat!("brandhue/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: &str, model: &str) -> anyhow::Result<Self> {
        Self::from_builder(reqwest::Client::builder(), base_url, model)
    }

    fn from_builder(
        builder: reqwest::ClientBuilder,
        base_url: &str,
        model: &str,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(Self::USER_AGENT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = builder
            .default_headers(headers)
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> anyhow::Result<Option<String>> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, "sending chat completion");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("send chat completion request")?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiErrorBody>(&raw) {
                Ok(api) => anyhow::bail!("chat completion error {status}: {}", api.error.message),
                Err(_) => anyhow::bail!("chat completion error {status}"),
            }
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("parse chat completion json")?;

        Ok(parsed.first_content())
    }
}
