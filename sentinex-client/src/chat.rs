//! Chat endpoint

use crate::AgentClient;
use crate::error::Result;
use sentinex_core::dto::chat::ChatRequest;

impl AgentClient {
    /// Send a free-form prompt to the DeFi chat agent
    ///
    /// # Returns
    /// The raw JSON reply; callers classify it with `ChatReply::classify`
    pub async fn chat(&self, prompt: &str) -> Result<serde_json::Value> {
        tracing::debug!("POST {}", self.endpoints.chat);
        let response = self
            .client
            .post(&self.endpoints.chat)
            .json(&ChatRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;
        self.handle_opaque_response(response).await
    }
}
