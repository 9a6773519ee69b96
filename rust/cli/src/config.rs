use serde::{Deserialize, Serialize};
use std::fs;

use crate::validation::parse_role;

/// Resolved CLI configuration. Command-line flags still override all of it;
/// this only covers the default -> file -> env layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default role for `play` ("emperor" or "slave"); prompt when unset
    pub role: Option<String>,
    /// Default RNG seed; random when unset
    pub seed: Option<u64>,
    /// Default transcript path for `play --log`
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub role: ValueSource,
    pub seed: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            role: ValueSource::Default,
            seed: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

#[allow(dead_code)]
pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ECARD_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.role {
            cfg.role = Some(v);
            sources.role = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = Some(v);
            sources.log = ValueSource::File;
        }
    }

    if let Ok(role) = std::env::var("ECARD_ROLE")
        && !role.is_empty()
    {
        cfg.role = Some(role);
        sources.role = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("ECARD_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(log) = std::env::var("ECARD_LOG")
        && !log.is_empty()
    {
        cfg.log = Some(log);
        sources.log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(role) = &cfg.role {
        if parse_role(role).is_none() {
            return Err(ConfigError::Invalid(format!(
                "role must be emperor or slave, got '{}'",
                role
            )));
        }
    }
    Ok(())
}
