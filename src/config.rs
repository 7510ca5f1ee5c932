use std::env;

use crate::bot::{LanguageError, Languages};

/* Config is read from the environment once at startup.
 * main loads a .env file from the working directory first, if present.
 *   BOT_TOKEN      bot token, TELOXIDE_TOKEN is accepted as well
 *   DEV_ID         chat id of the administrator
 *   BOT_LANGUAGES  comma separated language codes, defaults to every built-in language
 */

const BOT_TOKEN: &str = "BOT_TOKEN";
const TELOXIDE_TOKEN: &str = "TELOXIDE_TOKEN";
const DEV_ID: &str = "DEV_ID";
const BOT_LANGUAGES: &str = "BOT_LANGUAGES";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("Language error: {0}")]
    LanguageError(LanguageError),
}

impl From<LanguageError> for ConfigError {
    fn from(language_error: LanguageError) -> ConfigError {
        ConfigError::LanguageError(language_error)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub dev_id: i64,
    pub languages: Languages,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    // Builds the config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let bot_token = non_empty(BOT_TOKEN)
            .or_else(|| non_empty(TELOXIDE_TOKEN))
            .ok_or(ConfigError::Missing(BOT_TOKEN))?;

        let dev_id = lookup(DEV_ID).ok_or(ConfigError::Missing(DEV_ID))?;
        let dev_id = dev_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid {
                name: DEV_ID,
                value: dev_id.clone(),
            })?;

        let languages = match lookup(BOT_LANGUAGES) {
            Some(codes) => Languages::from_codes(&codes.split(',').collect::<Vec<&str>>())?,
            None => Languages::builtin(),
        };

        Ok(Config {
            bot_token,
            dev_id,
            languages,
        })
    }
}

// Tests
#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, ConfigError};
    use crate::bot::LanguageError;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("BOT_TOKEN", "token"), ("DEV_ID", "42")]).unwrap();
        assert_eq!(config.bot_token, "token");
        assert_eq!(config.dev_id, 42);
        assert_eq!(config.languages.len(), 3);
    }

    #[test]
    fn test_teloxide_token_and_languages() {
        let config = config(&[
            ("TELOXIDE_TOKEN", "token"),
            ("DEV_ID", " -1001 "),
            ("BOT_LANGUAGES", "es,en"),
        ])
        .unwrap();
        assert_eq!(config.dev_id, -1001);
        assert_eq!(config.languages.ordered(), vec!["en", "es"]);
    }

    #[test]
    fn test_empty_token_falls_back_to_teloxide_token() {
        let cfg = config(&[
            ("BOT_TOKEN", " "),
            ("TELOXIDE_TOKEN", "token"),
            ("DEV_ID", "42"),
        ])
        .unwrap();
        assert_eq!(cfg.bot_token, "token");

        assert_eq!(
            config(&[("BOT_TOKEN", ""), ("TELOXIDE_TOKEN", ""), ("DEV_ID", "42")]).unwrap_err(),
            ConfigError::Missing("BOT_TOKEN")
        );
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            config(&[("DEV_ID", "42")]).unwrap_err(),
            ConfigError::Missing("BOT_TOKEN")
        );
        assert_eq!(
            config(&[("BOT_TOKEN", "token")]).unwrap_err(),
            ConfigError::Missing("DEV_ID")
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config(&[("BOT_TOKEN", "token"), ("DEV_ID", "admin")]).unwrap_err(),
            ConfigError::Invalid {
                name: "DEV_ID",
                value: "admin".to_string(),
            }
        );
        assert_eq!(
            config(&[("BOT_TOKEN", "t"), ("DEV_ID", "1"), ("BOT_LANGUAGES", "en,fr")]).unwrap_err(),
            ConfigError::LanguageError(LanguageError::Unknown("fr".to_string()))
        );
    }
}
