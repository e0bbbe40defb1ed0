//! Launchpad API Handlers
//!
//! Canned sentiment, extraction, deploy, mint and announcement endpoints.

use axum::{Json, extract::State};
use sentinex_core::dto::launchpad::{
    AnnounceRequest, DeployRequest, DeployResponse, ExtractionResponse, MintRequest,
    MintResponse, PromptRequest, SentimentResponse,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /sentimentAnalysis
pub async fn sentiment_analysis(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Json<SentimentResponse> {
    tracing::debug!("Sentiment requested for: {}", req.prompt);
    Json(SentimentResponse {
        sentiment: state.scenario.sentiment,
    })
}

/// POST /launchpadChat
/// Pulls the token fields out of the prompt with simple keyword matching
pub async fn launchpad_chat(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Json<ExtractionResponse> {
    let mut extraction = extract(&req.prompt);
    if extraction.owner.is_none() {
        extraction.owner = state.scenario.owner.clone();
    }
    tracing::debug!("Extracted {:?}", extraction);
    Json(extraction)
}

/// POST /deployContract
/// EVM-style deployment returning a bare address
pub async fn deploy_contract(Json(req): Json<DeployRequest>) -> ApiResult<Json<DeployResponse>> {
    validate_deploy(&req)?;
    let address = format!("0x{}00000000", Uuid::new_v4().simple());
    tracing::info!("Deployed {} ({}) at {}", req.name, req.symbol, address);
    Ok(Json(DeployResponse::Address(address)))
}

/// POST /deploy
/// SNIP-20 token service deployment returning address and code hash
pub async fn deploy_snip20(Json(req): Json<DeployRequest>) -> ApiResult<Json<DeployResponse>> {
    validate_deploy(&req)?;
    let id = Uuid::new_v4().simple().to_string();
    let response = DeployResponse::Detailed {
        contract_address: format!("secret1{}", id),
        contract_code_hash: Some(format!("{}{}", id, id)),
        code_id: Some(1),
    };
    tracing::info!("Deployed SNIP-20 {} ({})", req.name, req.symbol);
    Ok(Json(response))
}

/// POST /mintTokens
pub async fn mint_tokens(Json(req): Json<MintRequest>) -> ApiResult<Json<MintResponse>> {
    validate_mint(&req)?;
    tracing::info!(
        "Minted {} on {} to {}",
        req.amount,
        req.contract_address,
        req.recipient
    );
    Ok(Json(MintResponse::Detailed {
        transaction_hash: transaction_hash(),
        status: Some("success".to_string()),
    }))
}

/// POST /transfer
/// Token service variant answering with a bare hash
pub async fn transfer(Json(req): Json<MintRequest>) -> ApiResult<Json<MintResponse>> {
    validate_mint(&req)?;
    if req.contract_code_hash.is_none() {
        return Err(ApiError::BadRequest(
            "contractCodeHash is required".to_string(),
        ));
    }
    Ok(Json(MintResponse::Hash(transaction_hash().to_uppercase())))
}

/// POST /postTweet
pub async fn post_tweet(
    State(state): State<AppState>,
    Json(req): Json<AnnounceRequest>,
) -> ApiResult<Json<Value>> {
    if state.scenario.tweet_fails {
        return Err(ApiError::RateLimited("Too Many Requests".to_string()));
    }
    tracing::info!("Posted announcement: {}", req.content);
    Ok(Json(serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "content": req.content,
    })))
}

fn validate_deploy(req: &DeployRequest) -> ApiResult<()> {
    if req.name.trim().is_empty() || req.symbol.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "name and symbol are required".to_string(),
        ));
    }
    if req.initial_supply == 0 {
        return Err(ApiError::BadRequest(
            "initialSupply must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_mint(req: &MintRequest) -> ApiResult<()> {
    if req.contract_address.is_empty() || req.recipient.is_empty() {
        return Err(ApiError::BadRequest(
            "contractAddress and recipient are required".to_string(),
        ));
    }
    if req.amount == 0 {
        return Err(ApiError::BadRequest(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn transaction_hash() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Keyword extraction: "named X", "symbol Y", "supply of N", and a `0x` or
/// `secret1` address anywhere in the prompt
fn extract(prompt: &str) -> ExtractionResponse {
    let words: Vec<String> = prompt.split_whitespace().map(clean).collect();

    let owner = words
        .iter()
        .find(|w| (w.starts_with("0x") && w.len() == 42) || w.starts_with("secret1"))
        .cloned();

    ExtractionResponse {
        name: word_after(&words, &["named", "called"]),
        symbol: word_after(&words, &["symbol", "ticker"]).map(|s| s.to_uppercase()),
        initial_supply: word_after(&words, &["supply"])
            .and_then(|s| s.replace(',', "").parse().ok()),
        owner,
    }
}

/// First meaningful word following any of `keys`
fn word_after(words: &[String], keys: &[&str]) -> Option<String> {
    let idx = words
        .iter()
        .position(|w| keys.contains(&w.to_lowercase().as_str()))?;
    words[idx + 1..]
        .iter()
        .find(|w| !w.is_empty() && !matches!(w.to_lowercase().as_str(), "of" | "is" | "as"))
        .cloned()
}

fn clean(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_string()
}
