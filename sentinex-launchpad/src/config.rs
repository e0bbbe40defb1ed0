//! Launchpad configuration
//!
//! Defines the agent endpoints, the deployment target and the launch policy
//! (mint fraction, default owner).

use anyhow::Context;
use sentinex_client::{AgentClient, Endpoints};
use sentinex_core::domain::token::MintFraction;
use std::time::Duration;

use crate::network::{NetworkKind, NetworkProfile};
use crate::service::LaunchSettings;

/// Launchpad configuration
#[derive(Debug, Clone)]
pub struct LaunchpadConfig {
    /// Agent base URL (e.g., "http://localhost:5001")
    pub agent_url: String,

    /// SNIP-20 token service base URL; when set, deploy and mint go there
    pub token_service_url: Option<String>,

    /// Deployment target
    pub network: NetworkKind,

    /// Overrides the network's default mint fraction
    pub mint_fraction: Option<MintFraction>,

    /// Owner address used when the extraction does not name one
    pub default_owner: Option<String>,

    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl LaunchpadConfig {
    /// Creates a new configuration with defaults
    pub fn new(agent_url: String) -> Self {
        Self {
            agent_url,
            token_service_url: None,
            network: NetworkKind::Taurus,
            mint_fraction: None,
            default_owner: None,
            request_timeout: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SENTINEX_AGENT_URL (optional, default: http://localhost:5001)
    /// - SENTINEX_TOKEN_SERVICE_URL (optional)
    /// - SENTINEX_NETWORK (optional, `taurus` or `secret`, default: taurus)
    /// - SENTINEX_MINT_FRACTION (optional, ratio in (0, 1])
    /// - SENTINEX_OWNER (optional)
    /// - SENTINEX_REQUEST_TIMEOUT (optional, seconds)
    pub fn from_env() -> anyhow::Result<Self> {
        let agent_url = std::env::var("SENTINEX_AGENT_URL")
            .unwrap_or_else(|_| "http://localhost:5001".to_string());

        let mut config = Self::new(agent_url);

        config.token_service_url = std::env::var("SENTINEX_TOKEN_SERVICE_URL").ok();

        if let Ok(network) = std::env::var("SENTINEX_NETWORK") {
            config.network = network
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid SENTINEX_NETWORK")?;
        }

        if let Ok(raw) = std::env::var("SENTINEX_MINT_FRACTION") {
            config.mint_fraction = Some(parse_mint_fraction(&raw)?);
        }

        config.default_owner = std::env::var("SENTINEX_OWNER")
            .ok()
            .filter(|s| !s.trim().is_empty());

        config.request_timeout = std::env::var("SENTINEX_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_url("agent_url", &self.agent_url)?;

        if let Some(url) = &self.token_service_url {
            validate_url("token_service_url", url)?;
        }

        if let Some(timeout) = self.request_timeout {
            if timeout.is_zero() {
                anyhow::bail!("request_timeout must be greater than 0");
            }
        }

        Ok(())
    }

    /// Resolved network preset
    pub fn network_profile(&self) -> NetworkProfile {
        NetworkProfile::preset(self.network)
    }

    /// Endpoint URLs derived from the agent and token service URLs
    pub fn endpoints(&self) -> Endpoints {
        let endpoints = Endpoints::new(&self.agent_url);
        match &self.token_service_url {
            Some(url) => endpoints.with_token_service(url),
            None => endpoints,
        }
    }

    /// Builds the HTTP client, applying the request timeout when configured
    pub fn build_client(&self) -> anyhow::Result<AgentClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(AgentClient::with_client(self.endpoints(), http))
    }

    /// Launch policy handed to the orchestrator
    pub fn launch_settings(&self) -> LaunchSettings {
        let network = self.network_profile();
        LaunchSettings {
            mint_fraction: self.mint_fraction.unwrap_or(network.default_mint_fraction),
            default_owner: self.default_owner.clone(),
            network,
        }
    }
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self::new("http://localhost:5001".to_string())
    }
}

/// Parses a mint fraction given as a ratio ("0.5") or a percentage ("50%")
pub fn parse_mint_fraction(raw: &str) -> anyhow::Result<MintFraction> {
    let raw = raw.trim();
    let ratio = match raw.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().map(|p| p / 100.0),
        None => raw.parse::<f64>(),
    }
    .with_context(|| format!("Invalid mint fraction '{}'", raw))?;

    MintFraction::from_ratio(ratio)
        .ok_or_else(|| anyhow::anyhow!("mint fraction must be in (0, 1], got '{}'", raw))
}

fn validate_url(field: &str, url: &str) -> anyhow::Result<()> {
    if url.is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", field);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LaunchpadConfig::default();
        assert_eq!(config.network, NetworkKind::Taurus);
        assert!(config.request_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = LaunchpadConfig::default();

        config.agent_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.agent_url = "http://localhost:5001".to_string();
        config.token_service_url = Some("localhost:3000".to_string());
        assert!(config.validate().is_err());

        config.token_service_url = Some("http://localhost:3000".to_string());
        assert!(config.validate().is_ok());

        config.request_timeout = Some(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_launch_settings_use_network_default() {
        let mut config = LaunchpadConfig::default();
        config.network = NetworkKind::Secret;
        assert_eq!(config.launch_settings().mint_fraction.basis_points(), 500);

        config.mint_fraction = MintFraction::from_ratio(0.25);
        assert_eq!(config.launch_settings().mint_fraction.basis_points(), 2_500);
    }

    #[test]
    fn test_endpoints_follow_token_service() {
        let mut config = LaunchpadConfig::default();
        assert_eq!(config.endpoints().deploy, "http://localhost:5001/deployContract");

        config.token_service_url = Some("http://localhost:3000".to_string());
        assert_eq!(config.endpoints().deploy, "http://localhost:3000/deploy");
    }

    #[test]
    fn test_parse_mint_fraction() {
        assert_eq!(parse_mint_fraction("0.5").unwrap().basis_points(), 5_000);
        assert_eq!(parse_mint_fraction("5%").unwrap().basis_points(), 500);
        assert!(parse_mint_fraction("0").is_err());
        assert!(parse_mint_fraction("abc").is_err());
        assert!(parse_mint_fraction("150%").is_err());
    }
}
