// Startup configuration, read once from the process environment.
//
// Secrets are required; everything else has a default. Loading goes through
// a lookup function so tests don't have to mutate the real environment.

use reqwest::header::HeaderValue;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PREFIX: char = '-';
const DEFAULT_SCRAPE_HOST: &str = "na.op.gg";
const DEFAULT_DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
const DEFAULT_THUMBNAIL_BASE_URL: &str = "http://ddragon.canisback.com/latest/img/champion";
const DEFAULT_REGION: &str = "na1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Platform region to Data Dragon realm.
const REGION_REALMS: &[(&str, &str)] = &[
    ("br1", "br"),
    ("eun1", "eune"),
    ("euw1", "euw"),
    ("jp1", "jp"),
    ("kr", "kr"),
    ("la1", "lan"),
    ("la2", "las"),
    ("na1", "na"),
    ("oc1", "oce"),
    ("ru", "ru"),
    ("tr1", "tr"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub riot_api_key: String,
    pub prefix: char,
    pub scrape_host: String,
    pub ddragon_base_url: String,
    pub thumbnail_base_url: String,
    pub region: String,
    /// Data Dragon realm derived from `region`.
    pub realm: String,
    pub request_timeout: Duration,
    pub moderate_bot_messages: bool,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let prefix = match optional("BOT_PREFIX") {
            Some(value) => parse_prefix(&value)?,
            None => DEFAULT_PREFIX,
        };

        let timeout_secs = match optional("HTTP_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "HTTP_TIMEOUT_SECS",
                    reason: format!("expected a positive number of seconds, got `{value}`"),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let moderate_bot_messages = match optional("MODERATE_BOT_MESSAGES") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::Invalid {
                    name: "MODERATE_BOT_MESSAGES",
                    reason: format!("expected true or false, got `{value}`"),
                })?,
            None => true,
        };

        let region = optional("RIOT_REGION")
            .map(|r| r.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let realm = realm_for_region(&region).ok_or_else(|| ConfigError::Invalid {
            name: "RIOT_REGION",
            reason: format!("unknown region `{region}`"),
        })?;

        let discord_token = required("DISCORD_TOKEN")?;

        // The key travels as a request header, so it must be a valid header value.
        let riot_api_key = required("RIOT_API_KEY")?;
        HeaderValue::from_str(&riot_api_key).map_err(|e| ConfigError::Invalid {
            name: "RIOT_API_KEY",
            reason: format!("not usable as a request header: {e}"),
        })?;

        Ok(Self {
            discord_token,
            riot_api_key,
            prefix,
            scrape_host: optional("SCRAPE_HOST").unwrap_or_else(|| DEFAULT_SCRAPE_HOST.to_string()),
            ddragon_base_url: optional("DDRAGON_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DDRAGON_BASE_URL.to_string()),
            thumbnail_base_url: optional("THUMBNAIL_BASE_URL")
                .unwrap_or_else(|| DEFAULT_THUMBNAIL_BASE_URL.to_string()),
            region,
            realm: realm.to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            moderate_bot_messages,
        })
    }
}

fn realm_for_region(region: &str) -> Option<&'static str> {
    REGION_REALMS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, realm)| *realm)
}

fn parse_prefix(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Invalid {
            name: "BOT_PREFIX",
            reason: format!("expected a single character, got `{value}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const SECRETS: [(&str, &str); 2] = [("DISCORD_TOKEN", "token"), ("RIOT_API_KEY", "RGAPI-key")];

    #[test]
    fn test_defaults() {
        let config = load(&SECRETS).unwrap();

        assert_eq!(config.prefix, '-');
        assert_eq!(config.scrape_host, "na.op.gg");
        assert_eq!(config.region, "na1");
        assert_eq!(config.realm, "na");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.moderate_bot_messages);
    }

    #[test]
    fn test_missing_secrets() {
        assert_eq!(
            load(&[("RIOT_API_KEY", "key")]).unwrap_err(),
            ConfigError::Missing("DISCORD_TOKEN")
        );
        assert_eq!(
            load(&[("DISCORD_TOKEN", "token"), ("RIOT_API_KEY", "  ")]).unwrap_err(),
            ConfigError::Missing("RIOT_API_KEY")
        );
    }

    #[test]
    fn test_overrides() {
        let mut vars = SECRETS.to_vec();
        vars.extend([
            ("BOT_PREFIX", "!"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("MODERATE_BOT_MESSAGES", "false"),
            ("RIOT_REGION", "EUW1"),
        ]);
        let config = load(&vars).unwrap();

        assert_eq!(config.prefix, '!');
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(!config.moderate_bot_messages);
        assert_eq!(config.region, "euw1");
        assert_eq!(config.realm, "euw");
    }

    #[test]
    fn test_api_key_with_trailing_newline_is_invalid() {
        let err = load(&[("DISCORD_TOKEN", "token"), ("RIOT_API_KEY", "RGAPI-key\n")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { name: "RIOT_API_KEY", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_invalid_values() {
        for (name, value) in [
            ("BOT_PREFIX", "!!"),
            ("HTTP_TIMEOUT_SECS", "0"),
            ("HTTP_TIMEOUT_SECS", "soon"),
            ("MODERATE_BOT_MESSAGES", "maybe"),
            ("RIOT_REGION", "atlantis1"),
        ] {
            let mut vars = SECRETS.to_vec();
            vars.push((name, value));
            assert!(
                matches!(load(&vars), Err(ConfigError::Invalid { name: n, .. }) if n == name),
                "{name}={value} should be rejected"
            );
        }
    }
}
