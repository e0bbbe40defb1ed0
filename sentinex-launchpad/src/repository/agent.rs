//! Agent repository
//!
//! Handles communication with the agent services for:
//! - Market sentiment and token extraction
//! - Contract deployment and minting
//! - Announcement publishing
//! - Free-form DeFi chat

use anyhow::{Context, Result};
use async_trait::async_trait;
use sentinex_client::AgentClient;
use sentinex_core::dto::launchpad::{
    AnnounceRequest, DeployRequest, DeployResponse, ExtractionResponse, MintRequest, MintResponse,
    SentimentResponse,
};

/// Remote calls made by the launchpad pipeline
#[async_trait]
pub trait LaunchpadRepository: Send + Sync {
    /// Classifies market sentiment for the prompt
    async fn analyze_sentiment(&self, prompt: &str) -> Result<SentimentResponse>;

    /// Extracts the token descriptor fields from the prompt
    async fn extract_token(&self, prompt: &str) -> Result<ExtractionResponse>;

    /// Deploys the token contract
    async fn deploy_contract(&self, req: &DeployRequest) -> Result<DeployResponse>;

    /// Mints tokens to the recipient
    async fn mint_tokens(&self, req: &MintRequest) -> Result<MintResponse>;

    /// Publishes the launch announcement
    async fn post_announcement(&self, req: &AnnounceRequest) -> Result<()>;
}

/// Remote call made by the chat view
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Sends a prompt and returns the raw, unclassified reply
    async fn send_prompt(&self, prompt: &str) -> Result<serde_json::Value>;
}

/// HTTP implementation of both repositories
pub struct HttpAgentRepository {
    client: AgentClient,
}

impl HttpAgentRepository {
    /// Creates a new HTTP agent repository
    ///
    /// # Arguments
    /// * `client` - Configured agent client
    pub fn new(client: AgentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LaunchpadRepository for HttpAgentRepository {
    async fn analyze_sentiment(&self, prompt: &str) -> Result<SentimentResponse> {
        self.client
            .analyze_sentiment(prompt)
            .await
            .context("Sentiment analysis request failed")
    }

    async fn extract_token(&self, prompt: &str) -> Result<ExtractionResponse> {
        self.client
            .extract_token(prompt)
            .await
            .context("Token extraction request failed")
    }

    async fn deploy_contract(&self, req: &DeployRequest) -> Result<DeployResponse> {
        self.client
            .deploy_contract(req)
            .await
            .with_context(|| format!("Failed to deploy contract for {}", req.symbol))
    }

    async fn mint_tokens(&self, req: &MintRequest) -> Result<MintResponse> {
        self.client
            .mint_tokens(req)
            .await
            .with_context(|| format!("Failed to mint tokens on {}", req.contract_address))
    }

    async fn post_announcement(&self, req: &AnnounceRequest) -> Result<()> {
        self.client
            .post_announcement(req)
            .await
            .context("Failed to publish announcement")?;
        Ok(())
    }
}

#[async_trait]
impl ChatRepository for HttpAgentRepository {
    async fn send_prompt(&self, prompt: &str) -> Result<serde_json::Value> {
        self.client.chat(prompt).await.context("Chat request failed")
    }
}
