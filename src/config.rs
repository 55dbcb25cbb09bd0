use std::{net::SocketAddr, path::PathBuf};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_INACTIVE_THRESHOLD_SECONDS: i64 = 3600;
const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;
const DEFAULT_QUESTIONS_PATH: &str = "questions.json";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_KEEP_ALIVE_ADDR: &str = "0.0.0.0:8080";

/// Process configuration, built once at startup and handed to each component.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,

    /// Channels watched for inactivity. Fixed for the process lifetime.
    pub monitored_channels: Vec<u64>,
    /// Seconds without a human message before a channel gets a revival post.
    pub inactive_threshold: i64,
    /// Seconds between inactivity sweeps.
    pub sweep_interval: u64,

    pub questions_path: PathBuf,
    pub command_prefix: String,
    pub keep_alive_addr: SocketAddr,

    /// Fixed seed for prompt and member selection, for replaying a run.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DISCORD_TOKEN` is required; every other value has a default. Empty
    /// values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present or defaulted and valid
    /// - `Err(AppError::ConfigErr)` - Token missing or a value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = var("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let monitored_channels = match var("MONITORED_CHANNELS") {
            Some(value) => parse_channel_list(&value)?,
            None => Vec::new(),
        };

        let inactive_threshold = match var("INACTIVE_THRESHOLD_SECONDS") {
            Some(value) => {
                let seconds = parse_positive("INACTIVE_THRESHOLD_SECONDS", &value)?;
                i64::try_from(seconds).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "INACTIVE_THRESHOLD_SECONDS".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?
            }
            None => DEFAULT_INACTIVE_THRESHOLD_SECONDS,
        };

        let sweep_interval = match var("SWEEP_INTERVAL_SECONDS") {
            Some(value) => parse_positive("SWEEP_INTERVAL_SECONDS", &value)?,
            None => DEFAULT_SWEEP_INTERVAL_SECONDS,
        };

        let keep_alive_raw =
            var("KEEP_ALIVE_ADDR").unwrap_or_else(|| DEFAULT_KEEP_ALIVE_ADDR.to_string());
        let keep_alive_addr =
            keep_alive_raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "KEEP_ALIVE_ADDR".to_string(),
                    value: keep_alive_raw.clone(),
                    reason: e.to_string(),
                })?;

        let rng_seed = match var("RNG_SEED") {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "RNG_SEED".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            discord_token,
            monitored_channels,
            inactive_threshold,
            sweep_interval,
            questions_path: PathBuf::from(
                var("QUESTIONS_PATH").unwrap_or_else(|| DEFAULT_QUESTIONS_PATH.to_string()),
            ),
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            keep_alive_addr,
            rng_seed,
        })
    }

    pub fn is_monitored(&self, channel_id: u64) -> bool {
        self.monitored_channels.contains(&channel_id)
    }
}

/// Parses a comma-separated list of channel snowflakes, ignoring blank entries.
fn parse_channel_list(value: &str) -> Result<Vec<u64>, ConfigError> {
    let mut channels = Vec::new();

    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = entry
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "MONITORED_CHANNELS".to_string(),
                value: entry.to_string(),
                reason: e.to_string(),
            })?;

        if !channels.contains(&id) {
            channels.push(id);
        }
    }

    Ok(channels)
}

fn parse_positive(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let parsed = value
        .trim()
        .parse::<u64>()
        .map_err(|e| invalid(e.to_string()))?;

    if parsed == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// Expected: defaults applied when only the token is set
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert!(config.monitored_channels.is_empty());
        assert_eq!(config.inactive_threshold, 3600);
        assert_eq!(config.sweep_interval, 300);
        assert_eq!(config.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.keep_alive_addr.port(), 8080);
        assert_eq!(config.rng_seed, None);
    }

    /// Expected: a u64 seed is accepted, a negative one rejected
    #[test]
    fn parses_rng_seed() {
        let config =
            Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("RNG_SEED", "42")])).unwrap();
        assert_eq!(config.rng_seed, Some(42));

        let bad = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("RNG_SEED", "-1")]));
        assert!(bad.is_err());
    }

    /// Expected: Err(MissingEnvVar) when the token is absent or blank
    #[test]
    fn requires_token() {
        let result = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    #[test]
    fn parses_channel_list() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("MONITORED_CHANNELS", " 123456789, 987654321,,123456789 "),
        ]))
        .unwrap();

        assert_eq!(config.monitored_channels, vec![123456789, 987654321]);
        assert!(config.is_monitored(987654321));
        assert!(!config.is_monitored(1));
    }

    #[test]
    fn rejects_invalid_values() {
        let bad_channel = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("MONITORED_CHANNELS", "123,general"),
        ]));
        assert!(matches!(
            bad_channel,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref value, .. })) if value == "general"
        ));

        let zero_interval = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("SWEEP_INTERVAL_SECONDS", "0"),
        ]));
        assert!(zero_interval.is_err());

        let huge_threshold = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("INACTIVE_THRESHOLD_SECONDS", "18446744073709551615"),
        ]));
        assert!(matches!(
            huge_threshold,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. }))
                if name == "INACTIVE_THRESHOLD_SECONDS"
        ));

        let bad_addr = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("KEEP_ALIVE_ADDR", "localhost"),
        ]));
        assert!(bad_addr.is_err());
    }
}
