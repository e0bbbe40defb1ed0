//! Configuration module
//!
//! Layers the command-line flags over the environment configuration and
//! validates the result.

use anyhow::{Context, Result};
use sentinex_launchpad::LaunchpadConfig;
use sentinex_launchpad::config::parse_mint_fraction;
use std::time::Duration;

/// Command-line overrides; `None` keeps the environment value
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// URL of the agent service
    pub agent_url: Option<String>,
    pub token_service_url: Option<String>,
    pub network: Option<String>,
    pub mint_fraction: Option<String>,
    pub owner: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Builds and validates the launchpad configuration from the environment
    /// plus these overrides
    pub fn launchpad(&self) -> Result<LaunchpadConfig> {
        let base = LaunchpadConfig::from_env().context("Invalid environment configuration")?;
        self.apply(base)
    }

    fn apply(&self, mut config: LaunchpadConfig) -> Result<LaunchpadConfig> {
        if let Some(url) = &self.agent_url {
            config.agent_url = url.clone();
        }
        if let Some(url) = &self.token_service_url {
            config.token_service_url = Some(url.clone());
        }
        config.token_service_url = config
            .token_service_url
            .filter(|url| !url.trim().is_empty());
        if let Some(network) = &self.network {
            config.network = network
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid --network")?;
        }
        if let Some(raw) = &self.mint_fraction {
            config.mint_fraction =
                Some(parse_mint_fraction(raw).context("Invalid --mint-fraction")?);
        }
        if let Some(owner) = self.owner.as_ref().filter(|o| !o.trim().is_empty()) {
            config.default_owner = Some(owner.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinex_launchpad::NetworkKind;

    #[test]
    fn test_defaults_are_valid() {
        let launchpad = Config::default().apply(LaunchpadConfig::default()).unwrap();
        assert_eq!(launchpad.network, NetworkKind::Taurus);
        assert_eq!(launchpad.agent_url, "http://localhost:5001");
        assert!(launchpad.mint_fraction.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = Config {
            network: Some("secret".to_string()),
            mint_fraction: Some("10%".to_string()),
            owner: Some("secret1owner".to_string()),
            timeout_secs: Some(30),
            ..Config::default()
        };

        let launchpad = cli.apply(LaunchpadConfig::default()).unwrap();
        assert_eq!(launchpad.network, NetworkKind::Secret);
        assert_eq!(launchpad.mint_fraction.unwrap().basis_points(), 1_000);
        assert_eq!(launchpad.default_owner.as_deref(), Some("secret1owner"));
        assert_eq!(launchpad.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_missing_flags_keep_environment_values() {
        let mut base = LaunchpadConfig::new("http://agent:8080".to_string());
        base.network = NetworkKind::Secret;
        base.mint_fraction = Some(parse_mint_fraction("0.25").unwrap());
        base.default_owner = Some("secret1env".to_string());
        base.token_service_url = Some("http://tokens:3000".to_string());

        let launchpad = Config {
            owner: Some("   ".to_string()),
            ..Config::default()
        }
        .apply(base)
        .unwrap();

        assert_eq!(launchpad.agent_url, "http://agent:8080");
        assert_eq!(launchpad.network, NetworkKind::Secret);
        assert_eq!(launchpad.mint_fraction.unwrap().basis_points(), 2_500);
        assert_eq!(launchpad.default_owner.as_deref(), Some("secret1env"));
        assert_eq!(
            launchpad.token_service_url.as_deref(),
            Some("http://tokens:3000")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cli = Config {
            network: Some("solana".to_string()),
            ..Config::default()
        };
        assert!(cli.apply(LaunchpadConfig::default()).is_err());

        let cli = Config {
            agent_url: Some("localhost:5001".to_string()),
            ..Config::default()
        };
        assert!(cli.apply(LaunchpadConfig::default()).is_err());

        let cli = Config {
            mint_fraction: Some("2".to_string()),
            ..Config::default()
        };
        assert!(cli.apply(LaunchpadConfig::default()).is_err());
    }
}
