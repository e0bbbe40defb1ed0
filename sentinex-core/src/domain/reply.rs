//! Chat reply classification
//!
//! The chat endpoint answers with several unrelated JSON shapes (bridge
//! receipts, bare balances, protocol analyses, wrapped text, errors).
//! [`ChatReply::classify`] decides the variant once, in a fixed precedence
//! order, so that each variant has exactly one renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::transcript::{Link, TranscriptEntry};
use crate::format::strip_code_fence;

/// A step in a protocol analysis walkthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolStep {
    #[serde(default)]
    pub step_number: Option<u32>,
    pub description: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub potential_fees: Option<String>,
}

/// Structured analysis of a DeFi protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolAnalysis {
    pub protocol_name: String,
    #[serde(default)]
    pub protocol_link: Option<String>,
    #[serde(default)]
    pub protocol_description: Option<String>,
    #[serde(default)]
    pub protocol_steps: Vec<ProtocolStep>,
    #[serde(default, rename = "slippage insights")]
    pub slippage_insights: Option<String>,
    #[serde(default)]
    pub estimated_slippage: Option<String>,
    #[serde(default)]
    pub overall_benefit: Option<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub alternative_protocols: Vec<String>,
}

/// Classified chat endpoint reply
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    /// Cross-chain transfer receipt with one explorer link per side
    Bridge {
        auto_evm_url: String,
        sepolia_url: String,
    },
    /// Wallet balance in ETH
    Balance(f64),
    ProtocolAnalysis(Box<ProtocolAnalysis>),
    PlainText { text: String, links: Vec<String> },
    Error(String),
}

impl ChatReply {
    /// Classifies a raw chat response
    ///
    /// Precedence, first match wins: bridge receipt, bare numeric balance,
    /// `{status: "success", result}` envelope, direct protocol object, error
    /// shapes, plain text.
    pub fn classify(value: JsonValue) -> Self {
        if let Some(reply) = as_bridge(&value) {
            return reply;
        }

        if let JsonValue::String(s) = &value {
            if let Some(balance) = parse_balance(s) {
                return ChatReply::Balance(balance);
            }
        }

        if value.get("status").and_then(JsonValue::as_str) == Some("success") {
            if let Some(result) = value.get("result") {
                return classify_success(result, value.get("tx_url"));
            }
        }

        if value.get("protocol_name").is_some() {
            if let Some(analysis) = as_protocol(&value) {
                return ChatReply::ProtocolAnalysis(Box::new(analysis));
            }
        }

        if value.get("status").and_then(JsonValue::as_str) == Some("error") {
            let message = value
                .get("message")
                .and_then(JsonValue::as_str)
                .unwrap_or("An error occurred with your request.");
            return ChatReply::Error(message.to_string());
        }

        match value {
            JsonValue::String(s) if s.to_lowercase().contains("error") => ChatReply::Error(s),
            JsonValue::String(s) => ChatReply::PlainText {
                text: s,
                links: Vec::new(),
            },
            other => ChatReply::PlainText {
                text: pretty(&other),
                links: Vec::new(),
            },
        }
    }

    /// Renders the reply as a single system transcript entry
    pub fn into_entry(self) -> TranscriptEntry {
        match self {
            ChatReply::Bridge {
                auto_evm_url,
                sepolia_url,
            } => TranscriptEntry::success(
                "Bridge transaction completed successfully! I've transferred tokens between Sepolia and Auto EVM networks.",
            )
            .with_link(Link::new(auto_evm_url, "View on Autonomys Explorer"))
            .with_link(Link::new(sepolia_url, "View on Etherscan")),
            ChatReply::Balance(balance) => TranscriptEntry::success(format!(
                "Current holdings in your wallet: {:.4} ETH",
                balance
            )),
            ChatReply::ProtocolAnalysis(analysis) => render_protocol(&analysis),
            ChatReply::PlainText { text, links } => links
                .into_iter()
                .fold(TranscriptEntry::system(text), |entry, url| {
                    entry.with_link(Link::new(url, "View Transaction"))
                }),
            ChatReply::Error(message) => TranscriptEntry::error(message),
        }
    }
}

fn as_bridge(value: &JsonValue) -> Option<ChatReply> {
    let auto_evm_url = value.get("AutoEVMURL")?.as_str()?;
    let sepolia_url = value.get("SepoliaURL")?.as_str()?;
    Some(ChatReply::Bridge {
        auto_evm_url: auto_evm_url.to_string(),
        sepolia_url: sepolia_url.to_string(),
    })
}

/// Matches `^\d*\.?\d*$` with at least one digit
fn parse_balance(s: &str) -> Option<f64> {
    let mut dots = 0;
    let mut digits = 0;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    s.parse().ok()
}

fn as_protocol(value: &JsonValue) -> Option<ProtocolAnalysis> {
    serde_json::from_value(value.clone()).ok()
}

fn classify_success(result: &JsonValue, tx_url: Option<&JsonValue>) -> ChatReply {
    if result.get("protocol_name").is_some() {
        if let Some(analysis) = as_protocol(result) {
            return ChatReply::ProtocolAnalysis(Box::new(analysis));
        }
    }

    if let Some(url) = tx_url.and_then(JsonValue::as_str) {
        return ChatReply::PlainText {
            text: text_of(result),
            links: vec![url.to_string()],
        };
    }

    if let JsonValue::String(s) = result {
        let body = strip_code_fence(s);
        if body.starts_with('{') {
            if let Ok(parsed) = serde_json::from_str::<JsonValue>(body) {
                if let Some(analysis) = as_protocol(&parsed) {
                    return ChatReply::ProtocolAnalysis(Box::new(analysis));
                }
            }
        }
    }

    ChatReply::PlainText {
        text: text_of(result),
        links: Vec::new(),
    }
}

fn text_of(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => pretty(other),
    }
}

fn pretty(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn render_protocol(analysis: &ProtocolAnalysis) -> TranscriptEntry {
    let mut lines = vec![analysis.protocol_name.clone()];

    if let Some(description) = &analysis.protocol_description {
        lines.push(description.clone());
    }

    if !analysis.protocol_steps.is_empty() {
        lines.push(String::new());
        lines.push("Steps to Follow:".to_string());
        for (idx, step) in analysis.protocol_steps.iter().enumerate() {
            let number = step.step_number.unwrap_or(idx as u32 + 1);
            let mut line = format!("  {}. {}", number, step.description);
            if let Some(time) = &step.estimated_time {
                line.push_str(&format!(" (Est. Time: {})", time));
            }
            if let Some(fees) = &step.potential_fees {
                line.push_str(&format!(" (Est. Fees: {})", fees));
            }
            lines.push(line);
        }
    }

    if let Some(insights) = &analysis.slippage_insights {
        lines.push(String::new());
        lines.push(format!("Slippage Insights: {}", insights));
    }
    if let Some(slippage) = &analysis.estimated_slippage {
        lines.push(format!("Estimated Slippage: {}", slippage));
    }
    if let Some(benefit) = &analysis.overall_benefit {
        lines.push(format!("Overall Benefit: {}", benefit));
    }

    if !analysis.risks.is_empty() {
        lines.push(String::new());
        lines.push("Risk Factors:".to_string());
        lines.extend(analysis.risks.iter().map(|r| format!("  • {}", r)));
    }

    if !analysis.alternative_protocols.is_empty() {
        lines.push(format!(
            "Alternative Protocols: {}",
            analysis.alternative_protocols.join(", ")
        ));
    }

    let entry = TranscriptEntry::system(lines.join("\n"));
    match &analysis.protocol_link {
        Some(link) => entry.with_link(Link::new(link.clone(), "View Protocol")),
        None => entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::EntryKind;
    use serde_json::json;

    #[test]
    fn test_bridge_takes_precedence() {
        let reply = ChatReply::classify(json!({
            "AutoEVMURL": "https://auto/tx/1",
            "SepoliaURL": "https://sepolia/tx/2",
            "status": "success",
            "result": "ignored"
        }));
        assert!(matches!(reply, ChatReply::Bridge { .. }));

        let entry = reply.into_entry();
        assert_eq!(entry.links.len(), 2);
        assert_eq!(entry.links[1].label, "View on Etherscan");
    }

    #[test]
    fn test_numeric_string_is_balance() {
        assert_eq!(ChatReply::classify(json!("1.2345")), ChatReply::Balance(1.2345));
        assert_eq!(ChatReply::classify(json!("42")), ChatReply::Balance(42.0));
        assert!(matches!(
            ChatReply::classify(json!(".")),
            ChatReply::PlainText { .. }
        ));
        assert!(matches!(
            ChatReply::classify(json!("1.2.3")),
            ChatReply::PlainText { .. }
        ));
    }

    #[test]
    fn test_success_envelope_with_protocol_object() {
        let reply = ChatReply::classify(json!({
            "status": "success",
            "result": {
                "protocol_name": "Uniswap",
                "protocol_link": "https://app.uniswap.org",
                "risks": ["impermanent loss"]
            }
        }));
        let ChatReply::ProtocolAnalysis(analysis) = reply else {
            panic!("expected protocol analysis");
        };
        assert_eq!(analysis.protocol_name, "Uniswap");
        assert_eq!(analysis.risks, vec!["impermanent loss".to_string()]);
    }

    #[test]
    fn test_success_envelope_with_tx_url() {
        let reply = ChatReply::classify(json!({
            "status": "success",
            "result": "Sent 0.1 ETH",
            "tx_url": "https://explorer/tx/abc"
        }));
        assert_eq!(
            reply,
            ChatReply::PlainText {
                text: "Sent 0.1 ETH".to_string(),
                links: vec!["https://explorer/tx/abc".to_string()],
            }
        );
    }

    #[test]
    fn test_success_envelope_with_fenced_json_string() {
        let reply = ChatReply::classify(json!({
            "status": "success",
            "result": "```json\n{\"protocol_name\": \"Aave\"}\n```"
        }));
        assert!(matches!(reply, ChatReply::ProtocolAnalysis(ref a) if a.protocol_name == "Aave"));
    }

    #[test]
    fn test_success_envelope_with_markdown() {
        let reply = ChatReply::classify(json!({"status": "success", "result": "# Hello"}));
        assert!(matches!(reply, ChatReply::PlainText { ref text, .. } if text == "# Hello"));
    }

    #[test]
    fn test_direct_protocol_object() {
        let reply = ChatReply::classify(json!({"protocol_name": "Curve"}));
        assert!(matches!(reply, ChatReply::ProtocolAnalysis(_)));
    }

    #[test]
    fn test_error_shapes() {
        assert_eq!(
            ChatReply::classify(json!({"status": "error", "message": "bad input"})),
            ChatReply::Error("bad input".to_string())
        );
        assert_eq!(
            ChatReply::classify(json!({"status": "error"})),
            ChatReply::Error("An error occurred with your request.".to_string())
        );
        assert!(matches!(
            ChatReply::classify(json!("Internal Error: timeout")),
            ChatReply::Error(_)
        ));
        assert_eq!(
            ChatReply::classify(json!("boom error")).into_entry().kind,
            EntryKind::Error
        );
    }

    #[test]
    fn test_fallback_pretty_prints_objects() {
        let reply = ChatReply::classify(json!({"foo": 1}));
        let ChatReply::PlainText { text, links } = reply else {
            panic!("expected plain text");
        };
        assert!(text.contains("\"foo\": 1"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_protocol_rendering_includes_sections() {
        let entry = ChatReply::classify(json!({
            "protocol_name": "Lido",
            "protocol_description": "Liquid staking",
            "protocol_steps": [
                {"step_number": 1, "description": "Connect wallet", "estimated_time": "1 min"}
            ],
            "alternative_protocols": ["Rocket Pool", "Frax"]
        }))
        .into_entry();

        assert!(entry.text.starts_with("Lido\nLiquid staking"));
        assert!(entry.text.contains("1. Connect wallet (Est. Time: 1 min)"));
        assert!(entry.text.contains("Alternative Protocols: Rocket Pool, Frax"));
        assert!(entry.links.is_empty());
    }
}
