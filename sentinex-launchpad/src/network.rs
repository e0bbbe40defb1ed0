//! Deployment network presets
//!
//! Each preset carries the explorer used for links and the default share of
//! the requested supply minted to the owner.

use sentinex_core::domain::token::MintFraction;
use std::fmt;
use std::str::FromStr;

/// Supported deployment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// Autonomys Auto EVM testnet
    Taurus,
    /// Secret Network testnet (SNIP-20 token service)
    Secret,
}

impl FromStr for NetworkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "taurus" | "autonomys" | "auto-evm" => Ok(NetworkKind::Taurus),
            "secret" | "pulsar" | "pulsar-3" => Ok(NetworkKind::Secret),
            other => Err(format!(
                "unknown network '{}' (expected 'taurus' or 'secret')",
                other
            )),
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkKind::Taurus => f.write_str("taurus"),
            NetworkKind::Secret => f.write_str("secret"),
        }
    }
}

/// Display and policy settings of a deployment target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    pub kind: NetworkKind,
    /// Used in transcript narration ("now live on ...")
    pub display_name: String,
    /// Used in the public announcement
    pub announce_name: String,
    pub explorer_url: String,
    /// Explorer path segment for contract pages
    pub address_path: String,
    /// Prepend `0x` to transaction hashes that lack it
    pub hex_tx_hashes: bool,
    pub default_mint_fraction: MintFraction,
}

impl NetworkProfile {
    pub fn preset(kind: NetworkKind) -> Self {
        match kind {
            NetworkKind::Taurus => Self {
                kind,
                display_name: "Auto EVM Taurus testnet".to_string(),
                announce_name: "Autonomys EVM Network (Taurus)".to_string(),
                explorer_url: "https://blockscout.taurus.autonomys.xyz".to_string(),
                address_path: "address".to_string(),
                hex_tx_hashes: true,
                default_mint_fraction: MintFraction::HALF,
            },
            NetworkKind::Secret => Self {
                kind,
                display_name: "Secret Network pulsar-3 testnet".to_string(),
                announce_name: "Secret Network (pulsar-3)".to_string(),
                explorer_url: "https://testnet.ping.pub/secret".to_string(),
                address_path: "account".to_string(),
                hex_tx_hashes: false,
                default_mint_fraction: MintFraction::FIVE_PERCENT,
            },
        }
    }

    /// Explorer page of a transaction
    pub fn transaction_url(&self, hash: &str) -> String {
        let hash = if self.hex_tx_hashes && !hash.starts_with("0x") {
            format!("0x{}", hash)
        } else {
            hash.to_string()
        };
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }

    /// Explorer page of a contract
    pub fn address_url(&self, address: &str) -> String {
        format!(
            "{}/{}/{}",
            self.explorer_url.trim_end_matches('/'),
            self.address_path,
            address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_kind() {
        assert_eq!("Taurus".parse::<NetworkKind>(), Ok(NetworkKind::Taurus));
        assert_eq!("pulsar-3".parse::<NetworkKind>(), Ok(NetworkKind::Secret));
        assert!("solana".parse::<NetworkKind>().is_err());
    }

    #[test]
    fn test_preset_mint_policy() {
        assert_eq!(
            NetworkProfile::preset(NetworkKind::Taurus)
                .default_mint_fraction
                .basis_points(),
            5_000
        );
        assert_eq!(
            NetworkProfile::preset(NetworkKind::Secret)
                .default_mint_fraction
                .basis_points(),
            500
        );
    }

    #[test]
    fn test_explorer_links() {
        let taurus = NetworkProfile::preset(NetworkKind::Taurus);
        assert_eq!(
            taurus.transaction_url("abc"),
            "https://blockscout.taurus.autonomys.xyz/tx/0xabc"
        );
        assert_eq!(
            taurus.transaction_url("0xabc"),
            "https://blockscout.taurus.autonomys.xyz/tx/0xabc"
        );
        assert_eq!(
            taurus.address_url("0x1"),
            "https://blockscout.taurus.autonomys.xyz/address/0x1"
        );

        let secret = NetworkProfile::preset(NetworkKind::Secret);
        assert_eq!(
            secret.transaction_url("ABC"),
            "https://testnet.ping.pub/secret/tx/ABC"
        );
    }
}
