//! Engine configuration.

use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Runtime configuration for the move oracle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark the automated player places.
    #[serde(default = "default_ai_mark")]
    ai_mark: Player,

    /// Cell symbols accepted and produced by the JSON codec.
    #[serde(default)]
    symbols: Symbols,

    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

/// Wire symbols for the three cell states, pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "SymbolsFile")]
pub struct Symbols {
    /// Symbol for an X mark.
    x: String,
    /// Symbol for an O mark.
    o: String,
    /// Symbol for an empty cell.
    empty: String,
}

/// `[symbols]` table as written on disk, before validation.
#[derive(Deserialize)]
struct SymbolsFile {
    #[serde(default = "default_x")]
    x: String,
    #[serde(default = "default_o")]
    o: String,
    #[serde(default = "default_empty")]
    empty: String,
}

impl TryFrom<SymbolsFile> for Symbols {
    type Error = ConfigError;

    fn try_from(file: SymbolsFile) -> Result<Self, Self::Error> {
        Self::new(file.x, file.o, file.empty)
    }
}

fn default_ai_mark() -> Player {
    Player::O
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_x() -> String {
    "X".to_string()
}

fn default_o() -> String {
    "O".to_string()
}

fn default_empty() -> String {
    " ".to_string()
}

impl Symbols {
    /// Creates a symbol set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] unless the three symbols are pairwise distinct.
    #[track_caller]
    pub fn new(
        x: impl Into<String>,
        o: impl Into<String>,
        empty: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let (x, o, empty) = (x.into(), o.into(), empty.into());
        if x == o || x == empty || o == empty {
            return Err(ConfigError::new(format!(
                "Cell symbols must be distinct (x = {:?}, o = {:?}, empty = {:?})",
                x, o, empty
            )));
        }
        Ok(Self { x, o, empty })
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
            empty: default_empty(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai_mark: default_ai_mark(),
            symbols: Symbols::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given automated player and default symbols.
    pub fn new(ai_mark: Player) -> Self {
        Self {
            ai_mark,
            ..Self::default()
        }
    }

    /// Returns the configuration with a different automated player.
    pub fn with_ai_mark(self, ai_mark: Player) -> Self {
        Self { ai_mark, ..self }
    }

    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, cannot be parsed,
    /// or declares ambiguous symbols.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(ai_mark = %config.ai_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or ambiguous symbols.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::from_file`] errors.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
