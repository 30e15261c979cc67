//! Configuration for the FSTRIPS language facade.
//!
//! ```toml
//! [language]
//! name = "blocks"
//! theories = ["equality", "arithmetic"]
//!
//! [operators]
//! assign = "<<"
//! assign_inverted = ">>"
//! ```
//!
//! Every key is optional. Raw TOML structs stay private; they are resolved
//! into validated settings at the parse boundary, so a loaded
//! [`FstripsConfig`] is always usable as-is.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use fstrips_types::{
    DEFAULT_LANGUAGE_NAME, Language, LanguageError, OperatorSymbols, Theory, language_with,
};
use serde::Deserialize;
use thiserror::Error;
use toml::de;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FSTRIPS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Covers both TOML syntax errors and rejected settings.
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse { path: PathBuf, source: de::Error },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("language name must not be empty")]
    EmptyName,
    #[error("invalid operator symbols: {0}")]
    Operators(#[from] LanguageError),
}

// ── Language ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLanguageSettings {
    name: Option<String>,
    theories: Option<Vec<Theory>>,
}

/// Resolved `[language]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLanguageSettings")]
pub struct LanguageSettings {
    name: String,
    theories: Vec<Theory>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_LANGUAGE_NAME.to_owned(),
            theories: vec![Theory::Equality],
        }
    }
}

impl TryFrom<RawLanguageSettings> for LanguageSettings {
    type Error = SettingsError;

    fn try_from(raw: RawLanguageSettings) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let name = match raw.name {
            Some(name) if name.trim().is_empty() => return Err(SettingsError::EmptyName),
            Some(name) => name,
            None => defaults.name,
        };
        let theories = match raw.theories {
            Some(theories) if !theories.is_empty() => theories,
            _ => defaults.theories,
        };
        Ok(Self { name, theories })
    }
}

impl LanguageSettings {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn theories(&self) -> &[Theory] {
        &self.theories
    }
}

// ── Operators ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperatorSettings {
    assign: Option<String>,
    assign_inverted: Option<String>,
}

/// Resolved `[operators]` table. Symbols are non-empty and distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawOperatorSettings")]
pub struct OperatorSettings {
    symbols: OperatorSymbols,
}

impl TryFrom<RawOperatorSettings> for OperatorSettings {
    type Error = SettingsError;

    fn try_from(raw: RawOperatorSettings) -> Result<Self, Self::Error> {
        let defaults = OperatorSymbols::default();
        let assign = raw.assign.unwrap_or_else(|| defaults.assign().to_owned());
        let assign_inverted = raw
            .assign_inverted
            .unwrap_or_else(|| defaults.assign_inverted().to_owned());
        Ok(Self {
            symbols: OperatorSymbols::new(assign, assign_inverted)?,
        })
    }
}

impl OperatorSettings {
    #[must_use]
    pub fn symbols(&self) -> &OperatorSymbols {
        &self.symbols
    }
}

// ── File ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FstripsConfig {
    language: LanguageSettings,
    operators: OperatorSettings,
}

impl FstripsConfig {
    /// Loads the config file from [`FstripsConfig::path`].
    ///
    /// A missing file is not an error and yields `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, de::Error> {
        toml::from_str(content)
    }

    /// `$FSTRIPS_CONFIG` if set, otherwise `fstrips/config.toml` under the
    /// platform config directory.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|dir| dir.join("fstrips").join("config.toml"))
    }

    #[must_use]
    pub fn language(&self) -> &LanguageSettings {
        &self.language
    }

    #[must_use]
    pub fn operators(&self) -> &OperatorSettings {
        &self.operators
    }

    /// Builds a fresh language through the facade using these settings.
    pub fn build_language(&self) -> Result<Language, LanguageError> {
        language_with(
            self.language.name(),
            self.language.theories(),
            self.operators.symbols(),
        )
    }
}
