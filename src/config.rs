use crate::error::ConfigError;
use std::time::Duration;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

pub const REVIEW_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default delay between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Immutable runtime configuration, built once at startup and passed into
/// the watcher. All three values are required; starting without any of them
/// is a fatal config-gate failure, not a retryable cycle error.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// Load config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load config through an arbitrary lookup. A missing variable and an
    /// empty one are the same failure: both leave a collaborator unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };

        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN_VAR)?,
            telegram_token: require(TELEGRAM_TOKEN_VAR)?,
            telegram_chat_id: require(TELEGRAM_CHAT_ID_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(vars: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn all_present_succeeds() {
        let vars = env(&[
            (PRACTICUM_TOKEN_VAR, "practicum-secret"),
            (TELEGRAM_TOKEN_VAR, "bot-secret"),
            (TELEGRAM_CHAT_ID_VAR, "12345"),
        ]);

        let config = load(&vars).unwrap();
        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_token, "bot-secret");
        assert_eq!(config.telegram_chat_id, "12345");
    }

    #[test]
    fn every_incomplete_subset_fails() {
        let names = [PRACTICUM_TOKEN_VAR, TELEGRAM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR];

        // All 2^3 presence combinations except all-present.
        for mask in 0..7u8 {
            let pairs: Vec<(&str, &str)> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| (*name, "value"))
                .collect();
            let vars = env(&pairs);

            let err = load(&vars).unwrap_err();
            let ConfigError::Missing(missing) = err;
            assert!(
                !pairs.iter().any(|(name, _)| *name == missing),
                "mask {mask:#05b} reported {missing}, which was set"
            );
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let vars = env(&[
            (PRACTICUM_TOKEN_VAR, "practicum-secret"),
            (TELEGRAM_TOKEN_VAR, ""),
            (TELEGRAM_CHAT_ID_VAR, "12345"),
        ]);

        let err = load(&vars).unwrap_err();
        let ConfigError::Missing(missing) = err;
        assert_eq!(missing, TELEGRAM_TOKEN_VAR);
    }

    #[test]
    fn reports_first_missing_variable_by_name() {
        let vars = env(&[(TELEGRAM_TOKEN_VAR, "bot-secret")]);

        let err = load(&vars).unwrap_err();
        assert_eq!(err.to_string(), format!("Required environment variable {PRACTICUM_TOKEN_VAR} is not set"));
    }
}
