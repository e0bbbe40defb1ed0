//! Stub behavior switches

/// Canned behavior of the stub agent
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Answer of the sentiment endpoint
    pub sentiment: bool,
    /// Make the announcement endpoint fail with 429
    pub tweet_fails: bool,
    /// Owner returned by the extraction when the prompt has no address
    pub owner: Option<String>,
}

impl Scenario {
    /// Reads the scenario from the environment
    ///
    /// Expected environment variables:
    /// - SENTINEX_STUB_SENTIMENT (optional, default: true)
    /// - SENTINEX_STUB_TWEET_FAILS (optional, default: false)
    /// - SENTINEX_STUB_OWNER (optional, default: a fixed test address)
    pub fn from_env() -> Self {
        let mut scenario = Self::default();

        if let Ok(value) = std::env::var("SENTINEX_STUB_SENTIMENT") {
            scenario.sentiment = parse_flag(&value).unwrap_or(scenario.sentiment);
        }
        if let Ok(value) = std::env::var("SENTINEX_STUB_TWEET_FAILS") {
            scenario.tweet_fails = parse_flag(&value).unwrap_or(scenario.tweet_fails);
        }
        if let Ok(owner) = std::env::var("SENTINEX_STUB_OWNER") {
            scenario.owner = Some(owner).filter(|o| !o.trim().is_empty());
        }

        scenario
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            sentiment: true,
            tweet_fails: false,
            owner: Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_default_scenario_is_happy_path() {
        let scenario = Scenario::default();
        assert!(scenario.sentiment);
        assert!(!scenario.tweet_fails);
        assert!(scenario.owner.is_some());
    }
}
