use crate::model::DeferralConfig;
use crate::model::deferral::DEFAULT_DEFER_DELAY;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("Failed to load .env file: {0}")]
    DotEnv(String),
}

/// Runtime settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct Settings {
    pub discord_token: String,
    pub deferral: DeferralConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;

        let discord_token = dotenvy::var("DISCORD_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let delay = parse_defer_delay(dotenvy::var("DEFER_REPLY_MS").ok().as_deref())?;
        let ephemeral = parse_ephemeral(dotenvy::var("DEFER_REPLY_EPHEMERAL").ok().as_deref())?;

        let deferral = match delay {
            Some(delay) => DeferralConfig::after(delay).ephemeral(ephemeral),
            None => DeferralConfig::disabled(),
        };

        Ok(Settings {
            discord_token,
            deferral,
        })
    }
}

/// A missing `.env` is fine; one that exists but can't be read or parsed is not
fn check_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(path) => {
            tracing::debug!("[CONFIG] Loaded environment from {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ConfigError::DotEnv(e.to_string())),
    }
}

/// Unset means the default delay; `0`, `off` or an empty value disables deferral
pub fn parse_defer_delay(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Some(DEFAULT_DEFER_DELAY));
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "off" | "none" => Ok(None),
        value => {
            let millis: u64 = value.parse().map_err(|_| ConfigError::Invalid {
                name: "DEFER_REPLY_MS",
                value: raw.to_string(),
            })?;
            Ok(Some(Duration::from_millis(millis)).filter(|d| !d.is_zero()))
        }
    }
}

pub fn parse_ephemeral(raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("true") | Some("1") | Some("yes") => Ok(true),
        Some("false") | Some("0") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            name: "DEFER_REPLY_EPHEMERAL",
            value: raw.unwrap_or_default().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defer_delay_defaults_when_unset() {
        assert_eq!(parse_defer_delay(None), Ok(Some(DEFAULT_DEFER_DELAY)));
    }

    #[test]
    fn test_defer_delay_disabled_values() {
        assert_eq!(parse_defer_delay(Some("0")), Ok(None));
        assert_eq!(parse_defer_delay(Some("off")), Ok(None));
        assert_eq!(parse_defer_delay(Some("  ")), Ok(None));
        assert_eq!(parse_defer_delay(Some("OFF")), Ok(None));
        assert_eq!(parse_defer_delay(Some(" None ")), Ok(None));
    }

    #[test]
    fn test_defer_delay_parses_millis() {
        assert_eq!(
            parse_defer_delay(Some("1500")),
            Ok(Some(Duration::from_millis(1500)))
        );
    }

    #[test]
    fn test_defer_delay_rejects_garbage() {
        assert!(matches!(
            parse_defer_delay(Some("soon")),
            Err(ConfigError::Invalid {
                name: "DEFER_REPLY_MS",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_dotenv_is_ignored() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(check_dotenv(Err(missing)), Ok(()));
        assert_eq!(check_dotenv(Ok(PathBuf::from(".env"))), Ok(()));
    }

    #[test]
    fn test_broken_dotenv_is_reported() {
        let broken = dotenvy::Error::LineParse("DISCORD_TOKEN='abc".to_string(), 14);
        assert!(matches!(check_dotenv(Err(broken)), Err(ConfigError::DotEnv(_))));

        let unreadable = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(
            check_dotenv(Err(unreadable)),
            Err(ConfigError::DotEnv(_))
        ));
    }

    #[test]
    fn test_ephemeral_values() {
        assert_eq!(parse_ephemeral(None), Ok(true));
        assert_eq!(parse_ephemeral(Some("FALSE")), Ok(false));
        assert_eq!(parse_ephemeral(Some("yes")), Ok(true));
        assert!(parse_ephemeral(Some("maybe")).is_err());
    }
}
