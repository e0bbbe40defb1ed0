//! Display formatting helpers

/// Shortens `value` to `prefix...suffix`, keeping `head` leading and `tail`
/// trailing characters. Values too short to benefit are returned unchanged.
pub fn truncate_middle(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail + 3 {
        return value.to_string();
    }
    let prefix: String = chars[..head].iter().collect();
    let suffix: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Short form used for wallet addresses (6...4)
pub fn short_address(address: &str) -> String {
    truncate_middle(address, 6, 4)
}

/// Short form used for contract addresses in summaries (8...6)
pub fn short_contract(address: &str) -> String {
    truncate_middle(address, 8, 6)
}

/// Strips a surrounding markdown code fence (```json ... ```) if present
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
