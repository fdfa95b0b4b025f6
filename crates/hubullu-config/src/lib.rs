use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;
use self::vocabulary::VocabularyConfig;

pub mod network;
pub mod translator;
pub mod ui;
pub mod vocabulary;

/// Variable lookup, `std::env::var` outside of tests
pub(crate) type Vars = dyn Fn(&str) -> Option<String>;

pub const CONFIG_FILE_NAME: &str = ".hubullu.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to merge config: {0}")]
    Merge(#[source] serde_json::Error),

    #[error("no {0} language given")]
    MissingLanguage(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub vocabulary: VocabularyConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by `HUBULLU_*` environment variables
    pub fn new() -> Self {
        Self::from_vars(&|key: &str| env::var(key).ok().filter(|v| !v.is_empty()))
    }

    pub(crate) fn from_vars(vars: &Vars) -> Self {
        Config {
            network: NetworkConfig::from_vars(vars),
            translator: TranslatorConfig::from_vars(vars),
            vocabulary: VocabularyConfig::from_vars(vars),
            ui: UiConfig::from_vars(vars),
        }
    }

    /// Read a JSON config file on top of `self`. Keys missing from the file keep their current value.
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |source: serde_json::Error| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let overrides: Value = serde_json::from_str(&data).map_err(parse_error)?;
        let mut merged = serde_json::to_value(&self).map_err(ConfigError::Merge)?;
        merge_values(&mut merged, overrides);

        let config = serde_json::from_value(merged).map_err(parse_error)?;
        tracing::info!("Using config file: {}", path.display());
        Ok(config)
    }

    /// Environment, then the config file at `path` or the default location if it exists
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::new();
        match path {
            Some(path) => config.merge_file(path),
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => config.merge_file(&path),
                None => Ok(config),
            },
        }
    }

    /// Source and target language, both required
    pub fn language_pair(&self) -> Result<(&str, &str), ConfigError> {
        let source = self
            .translator
            .source_lang
            .as_deref()
            .ok_or(ConfigError::MissingLanguage("source"))?;
        let target = self
            .translator
            .target_lang
            .as_deref()
            .ok_or(ConfigError::MissingLanguage("target"))?;
        Ok((source, target))
    }
}

/// `$HOME/.hubullu.json`
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

fn merge_values(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
