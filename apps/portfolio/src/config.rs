use std::time::Duration;

use anyhow::{Context, Result};

use crate::particles::DEFAULT_COMPACT_BREAKPOINT_PX;

/// Application configuration loaded from environment variables.
///
/// The form relay access key is optional here on purpose: a missing key is
/// reported when a visitor submits the form, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub form_relay_access_key: Option<String>,
    pub form_relay_timeout: Option<Duration>,
    pub compact_breakpoint_px: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(8080),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            form_relay_access_key: optional_env("WEB3FORMS_ACCESS_KEY"),
            form_relay_timeout: parse_env::<u64>("FORM_RELAY_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            compact_breakpoint_px: parse_env("COMPACT_BREAKPOINT_PX")?
                .unwrap_or(DEFAULT_COMPACT_BREAKPOINT_PX),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_missing_is_none() {
        assert!(parse_env::<u16>("PORTFOLIO_TEST_UNSET_VAR").unwrap().is_none());
    }

    #[test]
    fn test_parse_env_reads_and_rejects() {
        std::env::set_var("PORTFOLIO_TEST_TIMEOUT", " 15 ");
        assert_eq!(parse_env::<u64>("PORTFOLIO_TEST_TIMEOUT").unwrap(), Some(15));

        std::env::set_var("PORTFOLIO_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("PORTFOLIO_TEST_BAD_PORT").unwrap_err();
        assert!(err.to_string().contains("PORTFOLIO_TEST_BAD_PORT"));
    }

    #[test]
    fn test_blank_value_counts_as_unset() {
        std::env::set_var("PORTFOLIO_TEST_BLANK_KEY", "   ");
        assert!(optional_env("PORTFOLIO_TEST_BLANK_KEY").is_none());
    }
}
