//! Token descriptor domain types

use serde::{Deserialize, Serialize};

use crate::dto::launchpad::ExtractionResponse;

/// Structured token request extracted from free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    pub name: String,
    pub symbol: String,
    pub initial_supply: u64,
    pub owner: String,
}

/// Fields the extraction endpoint failed to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Symbol,
    InitialSupply,
    Owner,
}

impl MissingField {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingField::Name => "name",
            MissingField::Symbol => "symbol",
            MissingField::InitialSupply => "initial supply",
            MissingField::Owner => "owner",
        }
    }
}

impl TokenDescriptor {
    /// Builds a descriptor from an extraction result
    ///
    /// Blank strings count as missing. `default_owner` is used when the
    /// extraction carries no owner address.
    ///
    /// # Returns
    /// The descriptor, or every missing field in declaration order
    pub fn from_extraction(
        extraction: &ExtractionResponse,
        default_owner: Option<&str>,
    ) -> Result<Self, Vec<MissingField>> {
        let name = non_blank(extraction.name.as_deref());
        let symbol = non_blank(extraction.symbol.as_deref());
        let supply = extraction.initial_supply.filter(|s| *s > 0);
        let owner = non_blank(extraction.owner.as_deref()).or_else(|| non_blank(default_owner));

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push(MissingField::Name);
        }
        if symbol.is_none() {
            missing.push(MissingField::Symbol);
        }
        if supply.is_none() {
            missing.push(MissingField::InitialSupply);
        }
        if owner.is_none() {
            missing.push(MissingField::Owner);
        }

        match (name, symbol, supply, owner) {
            (Some(name), Some(symbol), Some(initial_supply), Some(owner)) => Ok(Self {
                name,
                symbol,
                initial_supply,
                owner,
            }),
            _ => Err(missing),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Share of the requested supply minted to the owner, in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintFraction(u32);

impl MintFraction {
    pub const FULL: u32 = 10_000;
    pub const HALF: MintFraction = MintFraction(5_000);
    pub const FIVE_PERCENT: MintFraction = MintFraction(500);

    /// Creates a fraction from basis points (1..=10000)
    pub fn from_basis_points(bps: u32) -> Option<Self> {
        (1..=Self::FULL).contains(&bps).then_some(Self(bps))
    }

    /// Creates a fraction from a ratio in (0, 1]
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if !ratio.is_finite() {
            return None;
        }
        Self::from_basis_points((ratio * Self::FULL as f64).round() as u32)
    }

    pub fn basis_points(self) -> u32 {
        self.0
    }

    pub fn as_percent(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Amount to mint for a requested supply, rounded down
    pub fn apply(self, supply: u64) -> u64 {
        ((supply as u128 * self.0 as u128) / Self::FULL as u128) as u64
    }
}
