//! Resolved extraction settings.

use std::fmt;
use std::str::FromStr;

use cssnode::Syntax;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bare rendered values; no scope tracking.
    #[default]
    Simple,
    /// Values with selector, name and media metadata when present.
    Full,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Mode::Simple),
            "full" => Ok(Mode::Full),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Settings the extraction engine runs with.
///
/// `syntax` does not change any algorithm; dialect differences are already
/// reflected in the node kinds the parser produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub syntax: Syntax,
    pub mode: Mode,
    /// Whether result keys keep the leading `--`.
    pub prefix: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            syntax: Syntax::Css,
            mode: Mode::Simple,
            prefix: true,
        }
    }
}

impl ExtractConfig {
    pub fn new(syntax: Syntax, mode: Mode, prefix: bool) -> Self {
        Self {
            syntax,
            mode,
            prefix,
        }
    }

    /// Resolves textual option values, rejecting unknown names.
    pub fn from_names(syntax: &str, mode: &str, prefix: bool) -> Result<Self, ConfigError> {
        Ok(Self::new(syntax.parse()?, mode.parse()?, prefix))
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn key_prefix(&self) -> &'static str {
        if self.prefix { "--" } else { "" }
    }
}
