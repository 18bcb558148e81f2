use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    schemas::{json_schema_response_format, SchemaHandle},
    services::TextGenerator,
};

const SYSTEM_PROMPT: &str =
    "Tu es un expert en voyage local. Tu réponds uniquement avec un document JSON conforme au schéma demandé.";

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// One call sends exactly one request: no retries and no caching.
#[derive(Clone, Debug)]
pub struct OpenAIClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIClient {
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| PlannerError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn chat_completion(&self, body: &Value) -> Result<Value> {
        let request_url = build_chat_url(&self.base_url);
        debug!(target: "evasion::generation", url = %request_url, "sending chat completion");

        let response = self
            .http
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "evasion-planner")
            .json(body)
            .send()
            .await
            .map_err(|err| PlannerError::Http(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Http(format!("Failed to read response: {err}")))?;

        if response_text.trim().is_empty() {
            if status.is_success() {
                return Err(PlannerError::EmptyResponse);
            }
            return Err(PlannerError::Http(format!("HTTP {} with empty body", status)));
        }

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|err| PlannerError::Http(format!("Failed to parse JSON: {err}")))?;

        if !status.is_success() {
            let api_message = response_json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or(response_text.clone());

            return Err(PlannerError::Http(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        if let Some(error) = response_json.get("error") {
            let error_message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(PlannerError::Http(format!("API error: {}", error_message)));
        }

        Ok(response_json)
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    async fn generate_structured(&self, prompt: &str, schema: &SchemaHandle) -> Result<String> {
        let messages = vec![
            json!({ "role": "system", "content": SYSTEM_PROMPT }),
            json!({ "role": "user", "content": prompt }),
        ];
        let body = ChatCompletionRequest::new(self.model.clone(), messages)
            .with_response_format(json_schema_response_format(schema))
            .into_value();

        let response = self.chat_completion(&body).await?;
        extract_message_content(&response)
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Text of the first choice, or `EmptyResponse` when there is none.
fn extract_message_content(response: &Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
        .ok_or(PlannerError::EmptyResponse)
}

#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    response_format: Option<Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            response_format: None,
        }
    }

    pub fn with_response_format(mut self, response_format: Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(response_format) = self.response_format {
            body["response_format"] = response_format;
        }

        body
    }
}
