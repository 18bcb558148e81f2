//! Outbound text generation.

pub mod openai_client;
pub mod prompt;

use async_trait::async_trait;

use crate::{error::Result, schemas::SchemaHandle};

pub use openai_client::OpenAIClient;
pub use prompt::{generate_itinerary_prompt, loading_tip, LOADING_TIPS};

/// A text-generation service able to answer with JSON following a schema.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` once and return the raw text of the answer.
    async fn generate_structured(&self, prompt: &str, schema: &SchemaHandle) -> Result<String>;
}
