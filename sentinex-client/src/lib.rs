//! Sentinex HTTP Client
//!
//! A small, typed HTTP client for the agent services behind the launchpad:
//! sentiment analysis, token extraction, contract deployment, minting,
//! announcement publishing and the DeFi chat.
//!
//! # Example
//!
//! ```no_run
//! use sentinex_client::{AgentClient, Endpoints};
//!
//! #[tokio::main]
//! async fn main() -> sentinex_client::Result<()> {
//!     let client = AgentClient::new(Endpoints::new("http://localhost:5001"));
//!
//!     let sentiment = client.analyze_sentiment("Launch a token named Rocket").await?;
//!     println!("favorable: {}", sentiment.sentiment);
//!     Ok(())
//! }
//! ```

pub mod error;
mod chat;
mod launchpad;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Full URLs of every endpoint the client talks to
///
/// Deployments point these at different hosts: the EVM flow keeps everything
/// on the agent service, while the SNIP-20 flow sends deploy and mint to a
/// separate token service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sentiment: String,
    pub extraction: String,
    pub deploy: String,
    pub mint: String,
    pub announce: String,
    pub chat: String,
}

impl Endpoints {
    /// Default paths on a single agent service
    ///
    /// # Arguments
    /// * `agent_url` - Base URL of the agent (e.g., "http://localhost:5001")
    pub fn new(agent_url: &str) -> Self {
        let base = agent_url.trim_end_matches('/');
        Self {
            sentiment: format!("{}/sentimentAnalysis", base),
            extraction: format!("{}/launchpadChat", base),
            deploy: format!("{}/deployContract", base),
            mint: format!("{}/mintTokens", base),
            announce: format!("{}/postTweet", base),
            chat: format!("{}/chat", base),
        }
    }

    /// Routes deploy and mint to a SNIP-20 token service (`/deploy`, `/transfer`)
    pub fn with_token_service(mut self, token_service_url: &str) -> Self {
        let base = token_service_url.trim_end_matches('/');
        self.deploy = format!("{}/deploy", base);
        self.mint = format!("{}/transfer", base);
        self
    }
}

/// HTTP client for the agent endpoints
#[derive(Debug, Clone)]
pub struct AgentClient {
    endpoints: Endpoints,
    client: Client,
}

impl AgentClient {
    /// Create a new agent client with a default HTTP client
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            client: Client::new(),
        }
    }

    /// Create a new agent client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoints: Endpoints, client: Client) -> Self {
        Self { endpoints, client }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// POST a JSON body and deserialize the JSON response
    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is opaque
    ///
    /// Non-JSON bodies are returned as a JSON string instead of failing.
    async fn handle_opaque_response(
        &self,
        response: reqwest::Response,
    ) -> Result<serde_json::Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), text));
        }

        Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::new("http://localhost:5001/");
        assert_eq!(endpoints.sentiment, "http://localhost:5001/sentimentAnalysis");
        assert_eq!(endpoints.extraction, "http://localhost:5001/launchpadChat");
        assert_eq!(endpoints.deploy, "http://localhost:5001/deployContract");
        assert_eq!(endpoints.mint, "http://localhost:5001/mintTokens");
        assert_eq!(endpoints.announce, "http://localhost:5001/postTweet");
        assert_eq!(endpoints.chat, "http://localhost:5001/chat");
    }

    #[test]
    fn test_token_service_endpoints() {
        let endpoints =
            Endpoints::new("http://localhost:5001").with_token_service("http://localhost:3000/");
        assert_eq!(endpoints.deploy, "http://localhost:3000/deploy");
        assert_eq!(endpoints.mint, "http://localhost:3000/transfer");
        assert_eq!(endpoints.announce, "http://localhost:5001/postTweet");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = AgentClient::with_client(Endpoints::new("http://localhost:5001"), Client::new());
        assert_eq!(client.endpoints().chat, "http://localhost:5001/chat");
    }
}
