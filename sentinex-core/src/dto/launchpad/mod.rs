//! Launchpad DTOs
//!
//! Bodies for the sentiment, extraction, deploy, mint and announce endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::token::TokenDescriptor;

/// Request body carrying the raw user prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Response of the sentiment endpoint
///
/// A missing flag is read as unfavorable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    #[serde(default)]
    pub sentiment: bool,
}

/// Response of the structured-extraction endpoint
///
/// Every field is optional on the wire; completeness is checked when the
/// response is turned into a [`TokenDescriptor`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(
        default,
        alias = "initial_supply",
        deserialize_with = "deserialize_supply"
    )]
    pub initial_supply: Option<u64>,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Accepts integers, floats (truncated) and numeric strings such as "100,000".
/// Anything else is treated as absent.
fn deserialize_supply<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        serde_json::Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
                .collect();
            cleaned.parse::<u64>().ok().or_else(|| {
                cleaned
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
        }
        _ => None,
    }))
}

/// Request body for contract deployment
///
/// `initialAmount` duplicates `initialSupply` for the SNIP-20 token service,
/// which reads that key instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    pub name: String,
    pub symbol: String,
    pub initial_supply: u64,
    pub initial_amount: u64,
    pub owner: String,
}

impl From<&TokenDescriptor> for DeployRequest {
    fn from(token: &TokenDescriptor) -> Self {
        Self {
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            initial_supply: token.initial_supply,
            initial_amount: token.initial_supply,
            owner: token.owner.clone(),
        }
    }
}

/// Response of the deploy endpoint: a detailed object or a bare address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeployResponse {
    #[serde(rename_all = "camelCase")]
    Detailed {
        contract_address: String,
        #[serde(default)]
        contract_code_hash: Option<String>,
        #[serde(default)]
        code_id: Option<u64>,
    },
    Address(String),
}

/// A contract that has been deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    pub address: String,
    pub code_hash: Option<String>,
}

impl From<DeployResponse> for DeployedContract {
    fn from(response: DeployResponse) -> Self {
        match response {
            DeployResponse::Detailed {
                contract_address,
                contract_code_hash,
                ..
            } => Self {
                address: contract_address,
                code_hash: contract_code_hash,
            },
            DeployResponse::Address(address) => Self {
                address,
                code_hash: None,
            },
        }
    }
}

/// Request body for minting tokens to the owner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub contract_address: String,
    pub recipient: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_code_hash: Option<String>,
}

/// Response of the mint endpoint: a detailed object or a bare hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MintResponse {
    #[serde(rename_all = "camelCase")]
    Detailed {
        transaction_hash: String,
        #[serde(default)]
        status: Option<String>,
    },
    Hash(String),
}

impl MintResponse {
    pub fn transaction_hash(&self) -> &str {
        match self {
            MintResponse::Detailed {
                transaction_hash, ..
            } => transaction_hash,
            MintResponse::Hash(hash) => hash,
        }
    }
}

/// Request body for publishing the launch announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnounceRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_accepts_numeric_shapes() {
        let cases = [
            (serde_json::json!({"initialSupply": 100000}), Some(100_000)),
            (serde_json::json!({"initialSupply": 2500.9}), Some(2_500)),
            (serde_json::json!({"initialSupply": "1,000,000"}), Some(1_000_000)),
            (serde_json::json!({"initial_supply": "42"}), Some(42)),
            (serde_json::json!({"initialSupply": "lots"}), None),
            (serde_json::json!({"initialSupply": -5}), None),
            (serde_json::json!({"initialSupply": null}), None),
            (serde_json::json!({}), None),
        ];

        for (json, expected) in cases {
            let parsed: ExtractionResponse = serde_json::from_value(json.clone()).unwrap();
            assert_eq!(parsed.initial_supply, expected, "input: {}", json);
        }
    }

    #[test]
    fn test_deploy_response_shapes() {
        let detailed: DeployResponse = serde_json::from_value(serde_json::json!({
            "codeId": 7,
            "contractCodeHash": "abc123",
            "contractAddress": "secret1xyz"
        }))
        .unwrap();
        let contract = DeployedContract::from(detailed);
        assert_eq!(contract.address, "secret1xyz");
        assert_eq!(contract.code_hash.as_deref(), Some("abc123"));

        let bare: DeployResponse = serde_json::from_value(serde_json::json!("0xdead")).unwrap();
        let contract = DeployedContract::from(bare);
        assert_eq!(contract.address, "0xdead");
        assert!(contract.code_hash.is_none());
    }

    #[test]
    fn test_mint_response_shapes() {
        let detailed: MintResponse = serde_json::from_value(serde_json::json!({
            "status": "Transfer successful",
            "transactionHash": "ABCD"
        }))
        .unwrap();
        assert_eq!(detailed.transaction_hash(), "ABCD");

        let bare: MintResponse = serde_json::from_value(serde_json::json!("beef")).unwrap();
        assert_eq!(bare.transaction_hash(), "beef");
    }

    #[test]
    fn test_mint_request_omits_missing_code_hash() {
        let req = MintRequest {
            contract_address: "0x1".to_string(),
            recipient: "0x2".to_string(),
            amount: 5,
            contract_code_hash: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contractAddress": "0x1", "recipient": "0x2", "amount": 5})
        );
    }
}
