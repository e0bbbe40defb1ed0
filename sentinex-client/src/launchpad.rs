//! Launchpad endpoints

use crate::AgentClient;
use crate::error::{ClientError, Result};
use sentinex_core::dto::launchpad::{
    AnnounceRequest, DeployRequest, DeployResponse, ExtractionResponse, MintRequest, MintResponse,
    PromptRequest, SentimentResponse,
};

impl AgentClient {
    // =============================================================================
    // Analysis
    // =============================================================================

    /// Classify market sentiment for a launch prompt
    pub async fn analyze_sentiment(&self, prompt: &str) -> Result<SentimentResponse> {
        let req = PromptRequest {
            prompt: prompt.to_string(),
        };
        self.post_json(&self.endpoints.sentiment, &req).await
    }

    /// Extract a structured token descriptor from free text
    pub async fn extract_token(&self, prompt: &str) -> Result<ExtractionResponse> {
        let req = PromptRequest {
            prompt: prompt.to_string(),
        };
        self.post_json(&self.endpoints.extraction, &req).await
    }

    // =============================================================================
    // On-chain Operations
    // =============================================================================

    /// Deploy a token contract
    ///
    /// # Returns
    /// The deployed contract address, with its code hash when the service reports one
    pub async fn deploy_contract(&self, req: &DeployRequest) -> Result<DeployResponse> {
        let response: DeployResponse = self.post_json(&self.endpoints.deploy, req).await?;
        let address = match &response {
            DeployResponse::Detailed {
                contract_address, ..
            } => contract_address,
            DeployResponse::Address(address) => address,
        };
        if address.trim().is_empty() {
            return Err(ClientError::ParseError(
                "Deploy response carried an empty contract address".to_string(),
            ));
        }
        Ok(response)
    }

    /// Mint (or transfer) tokens to a recipient
    pub async fn mint_tokens(&self, req: &MintRequest) -> Result<MintResponse> {
        if req.amount == 0 {
            return Err(ClientError::InvalidRequest(
                "Mint amount must be greater than zero".to_string(),
            ));
        }
        self.post_json(&self.endpoints.mint, req).await
    }

    // =============================================================================
    // Social
    // =============================================================================

    /// Publish the launch announcement
    ///
    /// The response body is opaque; only success or failure matters.
    pub async fn post_announcement(&self, req: &AnnounceRequest) -> Result<serde_json::Value> {
        tracing::debug!("POST {}", self.endpoints.announce);
        let response = self
            .client
            .post(&self.endpoints.announce)
            .json(req)
            .send()
            .await?;
        self.handle_opaque_response(response).await
    }
}
