use std::path::Path;

use serde::Deserialize;

use crate::http::MessageKind;
use crate::http::validator::StartLineSplit;

/// How line terminators are handled before a line is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Lines are split on `\n` and one trailing `\r` is removed.
    #[default]
    Crlf,
    /// Lines are split on `\n` only; a trailing `\r` stays attached to the
    /// last token of the line.
    Lf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("fail to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("fail to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parser settings, usually read from a TOML file:
///
/// ```toml
/// message = "response"
/// line_endings = "crlf"
/// start_line = "rejoin"
/// ```
///
/// Every key is optional and falls back to [`ParserConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub message: MessageKind,
    pub line_endings: LineEndings,
    pub start_line: StartLineSplit,
}

impl ParserConfig {
    pub fn new(message: MessageKind) -> Self {
        Self {
            message,
            ..Self::default()
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<ParserConfig>(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Like [`load`](Self::load) but falls back to the default config on error.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}");
                tracing::warn!("Fall back to default config");
                ParserConfig::default()
            }
        }
    }
}
