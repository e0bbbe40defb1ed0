//! User-facing transcript text

use sentinex_core::domain::token::{MissingField, TokenDescriptor};
use sentinex_core::dto::launchpad::DeployedContract;
use sentinex_core::format::short_contract;

use crate::network::NetworkProfile;

pub const LAUNCHPAD_GREETING: &str = "Welcome to the Social Launchpad. I can help you deploy your token in a few simple steps. Describe your token (e.g., Create a token named Rocket with symbol RKT and supply of 100,000).";

pub const CHAT_GREETING: &str =
    "Chat cleared. Ask me anything about DeFi protocols, bridging and your wallet.";

pub const UNFAVORABLE_SENTIMENT: &str = "I'm sorry, but the market sentiment doesn't seem favorable right now. Consider trying again later.";

pub const SENTIMENT_FAVORABLE: &str = "Market sentiment analysis complete. Current market conditions look favorable for your token launch.";

pub const RUN_FAILED: &str = "I'm sorry, but there was an error processing your request. Please check your connection and try again.";

pub const CHAT_FAILED: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

pub const ANNOUNCING: &str = "Announcing your token launch on Twitter...";

pub const ANNOUNCED: &str = "Launch announcement has been posted on Twitter.";

pub const ANNOUNCE_RATE_LIMITED: &str = "Failed to publish the launch announcement (rate limit). Your token is live; you can share it manually.";

pub const ANNOUNCE_FAILED: &str =
    "Failed to publish the launch announcement. Your token is live; you can share it manually.";

pub const CONGRATULATIONS: &str = "Congratulations! Your token has been successfully launched.";

/// Asks the user to resubmit with the fields the extraction could not find
pub fn incomplete_token(missing: &[MissingField]) -> String {
    let fields: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
    format!(
        "I couldn't find the token {} in your request. Please try again and include the token name, symbol and supply (e.g., Create a token named Rocket with symbol RKT and supply of 100,000).",
        fields.join(", ")
    )
}

pub fn nothing_to_mint(supply: u64, percent: f64) -> String {
    format!(
        "A supply of {} is too small to mint {}% to the owner. Please try again with a larger supply.",
        supply, percent
    )
}

pub fn deploying(network: &NetworkProfile) -> String {
    format!("Deploying your token contract on {}...", network.display_name)
}

pub fn deployed(token: &TokenDescriptor, network: &NetworkProfile) -> String {
    format!(
        "Contract deployed successfully. {} ({}) is now live on the {}.",
        token.name, token.symbol, network.display_name
    )
}

pub fn minting(amount: u64, owner: &str) -> String {
    format!(
        "Minting {} tokens to {}",
        amount,
        sentinex_core::format::short_address(owner)
    )
}

pub fn minted(amount: u64, symbol: &str, transaction_hash: &str) -> String {
    format!(
        "Successfully minted {} {} tokens. Transaction hash: {}",
        amount, symbol, transaction_hash
    )
}

/// Public announcement text
pub fn announcement(
    token: &TokenDescriptor,
    contract: &DeployedContract,
    network: &NetworkProfile,
) -> String {
    format!(
        "I deployed my own token named ${} on {} and here is the contract address: {}",
        token.symbol, network.announce_name, contract.address
    )
}

/// Multi-line launch summary
pub fn summary(
    token: &TokenDescriptor,
    contract: &DeployedContract,
    minted: u64,
    announced: bool,
) -> String {
    format!(
        "Token launch summary:\n\n\
         • Name: {}\n\
         • Symbol: {}\n\
         • Requested Supply: {} tokens\n\
         • Minted to Owner: {} tokens\n\
         • Contract: {}\n\
         • Market Sentiment: Positive\n\
         • Twitter Announcement: {}",
        token.name,
        token.symbol,
        token.initial_supply,
        minted,
        short_contract(&contract.address),
        if announced { "Complete" } else { "Failed" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkKind;

    fn rocket() -> TokenDescriptor {
        TokenDescriptor {
            name: "Rocket".to_string(),
            symbol: "RKT".to_string(),
            initial_supply: 100_000,
            owner: "0x1111222233334444".to_string(),
        }
    }

    fn contract() -> DeployedContract {
        DeployedContract {
            address: "0xabcdef0123456789abcdef0123456789abcdef01".to_string(),
            code_hash: None,
        }
    }

    #[test]
    fn test_announcement_embeds_symbol_and_address() {
        let text = announcement(
            &rocket(),
            &contract(),
            &NetworkProfile::preset(NetworkKind::Taurus),
        );
        assert!(text.contains("$RKT"));
        assert!(text.contains("0xabcdef0123456789abcdef0123456789abcdef01"));
        assert!(text.contains("Taurus"));
    }

    #[test]
    fn test_summary_truncates_contract() {
        let text = summary(&rocket(), &contract(), 50_000, false);
        assert!(text.contains("• Contract: 0xabcdef...cdef01"));
        assert!(text.contains("Minted to Owner: 50000 tokens"));
        assert!(text.ends_with("Twitter Announcement: Failed"));
    }

    #[test]
    fn test_incomplete_token_lists_fields() {
        let text = incomplete_token(&[MissingField::Symbol, MissingField::InitialSupply]);
        assert!(text.contains("symbol, initial supply"));
        assert!(text.contains("Please try again"));
    }
}
