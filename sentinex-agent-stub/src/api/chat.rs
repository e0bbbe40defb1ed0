//! Chat API Handler
//!
//! Answers in each of the reply shapes the chat view understands, picked by
//! keywords in the prompt.

use axum::Json;
use sentinex_core::dto::chat::ChatRequest;
use serde_json::{Value, json};

/// POST /chat
pub async fn chat(Json(req): Json<ChatRequest>) -> Json<Value> {
    let prompt = req.prompt.to_lowercase();
    tracing::debug!("Chat prompt: {}", req.prompt);

    let reply = if prompt.contains("balance") {
        json!("0.123456")
    } else if prompt.contains("bridge") {
        json!({
            "AutoEVMURL": "https://blockscout.taurus.autonomys.xyz/tx/0xabc",
            "SepoliaURL": "https://sepolia.etherscan.io/tx/0xdef",
        })
    } else if prompt.contains("swap") || prompt.contains("protocol") {
        json!({
            "status": "success",
            "result": {
                "protocol_name": "Uniswap V3",
                "protocol_description": "Concentrated liquidity AMM",
                "protocol_steps": [
                    {"step_number": 1, "description": "Approve the token", "estimated_time": "30s"},
                    {"step_number": 2, "description": "Execute the swap", "potential_fees": "0.3%"}
                ],
                "risks": ["Impermanent loss"],
                "alternative_protocols": ["Curve", "Balancer"],
                "protocol_link": "https://app.uniswap.org"
            }
        })
    } else if prompt.contains("fail") {
        json!({"status": "error", "message": "Agent could not complete the request"})
    } else {
        json!(format!("You said: {}", req.prompt))
    };

    Json(reply)
}
