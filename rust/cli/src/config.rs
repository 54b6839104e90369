use crate::session::Opening;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Path of an optional TOML file with any subset of the [`Config`] keys.
pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";
pub const SEED_ENV: &str = "TICTACTOE_SEED";
pub const HUMAN_FIRST_ENV: &str = "TICTACTOE_HUMAN_FIRST";
pub const OPENING_ENV: &str = "TICTACTOE_OPENING";
pub const GAMES_ENV: &str = "TICTACTOE_GAMES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub human_first: bool,
    pub seed: Option<u64>,
    pub opening: Opening,
    pub games: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub human_first: ValueSource,
    pub seed: ValueSource,
    pub opening: ValueSource,
    pub games: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            human_first: ValueSource::Default,
            seed: ValueSource::Default,
            opening: ValueSource::Default,
            games: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_first: true,
            seed: None,
            opening: Opening::Center,
            games: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the file named by `TICTACTOE_CONFIG`, then the
/// individual environment variables. Empty variables are ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.human_first {
            cfg.human_first = v;
            sources.human_first = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opening {
            cfg.opening = v;
            sources.opening = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(first) = std::env::var(HUMAN_FIRST_ENV)
        && !first.is_empty()
    {
        cfg.human_first = parse_bool(&first)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid human_first: {}", first)))?;
        sources.human_first = ValueSource::Env;
    }
    if let Ok(opening) = std::env::var(OPENING_ENV)
        && !opening.is_empty()
    {
        cfg.opening = Opening::parse(&opening)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid opening: {}", opening)))?;
        sources.opening = ValueSource::Env;
    }
    if let Ok(games) = std::env::var(GAMES_ENV)
        && !games.is_empty()
    {
        cfg.games = games
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid games: {}", games)))?;
        sources.games = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    human_first: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opening: Option<Opening>,
    #[serde(default)]
    games: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.games == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: games must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
