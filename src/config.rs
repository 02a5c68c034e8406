use std::{path::PathBuf, time::Duration};

use warriors_app::config::{SwissConfig, TournamentConfig};
use warriors_core::ranking::StandingsOrder;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub file_path: String,
    pub archive_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub logging: LogConfig,
    pub seed_file: Option<PathBuf>,
    pub tournament: TournamentConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let standings_order = match lookup("WARRIORS_SWISS_ORDER").as_deref() {
            None | Some("ascending") => StandingsOrder::Ascending,
            Some("best_first") => StandingsOrder::BestFirst,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "WARRIORS_SWISS_ORDER",
                    value: other.to_string(),
                });
            }
        };

        let mut tournament = TournamentConfig {
            swiss: SwissConfig { standings_order },
            ..TournamentConfig::default()
        };
        if let Some(ttl) = lookup("WARRIORS_PLAYER_CACHE_TTL_SECS") {
            let secs = ttl.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "WARRIORS_PLAYER_CACHE_TTL_SECS",
                value: ttl.clone(),
            })?;
            tournament.player_cache_ttl = Duration::from_secs(secs);
        }

        Ok(ServerConfig {
            logging: LogConfig {
                file_path: required("LOG_FILE_PATH")?,
                archive_pattern: required("LOG_ARCHIVE_PATTERN")?,
            },
            seed_file: lookup("WARRIORS_SEED_FILE").map(PathBuf::from),
            tournament,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LOG_FILE_PATH", "logs/warriors.log"),
            ("LOG_ARCHIVE_PATTERN", "logs/warriors.{}.log.gz"),
        ]))
        .unwrap();
        assert_eq!(config.seed_file, None);
        assert_eq!(config.tournament, TournamentConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LOG_FILE_PATH", "warriors.log"),
            ("LOG_ARCHIVE_PATTERN", "warriors.{}.log"),
            ("WARRIORS_SEED_FILE", "seed.json"),
            ("WARRIORS_SWISS_ORDER", "best_first"),
            ("WARRIORS_PLAYER_CACHE_TTL_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
        assert_eq!(
            config.tournament.swiss.standings_order,
            StandingsOrder::BestFirst
        );
        assert_eq!(config.tournament.player_cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("LOG_FILE_PATH"))
        );
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[
                ("LOG_FILE_PATH", "a"),
                ("LOG_ARCHIVE_PATTERN", "b"),
                ("WARRIORS_SWISS_ORDER", "descending"),
            ])),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
