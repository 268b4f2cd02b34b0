//! Configuration loading from TOML.
//!
//! Reads `roshambo.toml` and deserializes into strongly-typed structs.
//! Every section is optional; missing values fall back to the defaults
//! below.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;

use crate::types::Cash;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub rounds: u32,
    /// Cash the loser of each decisive round pays the winner.
    pub stake: Cash,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub starting_cash: Cash,
    /// Paid to the player before every round. 0 means no money source.
    #[serde(default)]
    pub income: Cash,
    /// Seed for reproducible throws; thread RNG when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            session: SessionConfig::default(),
            players: vec![
                PlayerConfig {
                    name: "Phillip".to_string(),
                    starting_cash: 100,
                    income: 0,
                    seed: None,
                },
                PlayerConfig {
                    name: "Flash".to_string(),
                    starting_cash: 1000,
                    income: 50,
                    seed: None,
                },
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roshambo=info".to_string(),
            json: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { rounds: 10, stake: 10 }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents).context("Invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.len() < 2 {
            bail!("At least two players are required, found {}", self.players.len());
        }
        if self.session.rounds == 0 {
            bail!("session.rounds must be greater than zero");
        }
        if self.session.stake < 0 {
            bail!("session.stake must not be negative (got {})", self.session.stake);
        }
        for p in &self.players {
            if p.name.trim().is_empty() {
                bail!("Player names must not be empty");
            }
            if p.starting_cash < 0 {
                bail!("Player {} has negative starting_cash {}", p.name, p.starting_cash);
            }
            if p.income < 0 {
                bail!("Player {} has negative income {}", p.name, p.income);
            }
        }
        Ok(())
    }
}
