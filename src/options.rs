//! User-facing extraction options.

use std::fmt;
use std::str::FromStr;

use cssnode::Syntax;
use propextract::{ExtractConfig, Mode};
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// Where the `source` argument of [`extract`](crate::extract) comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// `source` is a path to a stylesheet.
    #[default]
    File,
    /// `source` is the stylesheet text itself.
    Content,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::File => "file",
            Source::Content => "content",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(Source::File),
            "content" => Ok(Source::Content),
            other => Err(ExtractError::UnknownSource(other.to_string())),
        }
    }
}

/// Options accepted by [`extract`](crate::extract).
///
/// Every field is optional when deserializing; missing fields take their
/// defaults and unknown fields are rejected.
///
/// ```rust
/// use custom_property_extract::{ExtractOptions, Source};
///
/// let options = ExtractOptions::from_json(r#"{ "syntax": "scss", "source": "content" }"#).unwrap();
/// assert_eq!(options.source, Source::Content);
/// assert!(options.prefix);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractOptions {
    pub syntax: Syntax,
    pub mode: Mode,
    pub prefix: bool,
    pub source: Source,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            syntax: Syntax::Css,
            mode: Mode::Simple,
            prefix: true,
            source: Source::File,
        }
    }
}

impl ExtractOptions {
    /// Parses and validates a JSON options object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves textual option values, e.g. taken from command-line flags.
    pub fn from_names(syntax: &str, mode: &str, prefix: bool, source: &str) -> Result<Self> {
        let config = ExtractConfig::from_names(syntax, mode, prefix)?;
        Ok(Self {
            syntax: config.syntax,
            mode: config.mode,
            prefix: config.prefix,
            source: source.parse()?,
        })
    }

    /// Options for extracting from in-memory text.
    pub fn content(syntax: Syntax) -> Self {
        Self {
            syntax,
            source: Source::Content,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// The settings the extraction engine itself needs.
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig::new(self.syntax, self.mode, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propextract::ConfigError;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ExtractOptions::from_json("{}").unwrap(), ExtractOptions::default());
    }

    #[test]
    fn all_fields() {
        let options = ExtractOptions::from_json(
            r#"{"syntax": "sass", "mode": "full", "prefix": false, "source": "content"}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            ExtractOptions::content(Syntax::Sass)
                .with_mode(Mode::Full)
                .with_prefix(false)
        );
    }

    #[test]
    fn rejects_unknown_fields_and_values() {
        for json in [
            r#"{"verbose": true}"#,
            r#"{"syntax": "less"}"#,
            r#"{"mode": "detailed"}"#,
            r#"{"prefix": "yes"}"#,
            r#"{"source": "url"}"#,
        ] {
            assert!(
                matches!(ExtractOptions::from_json(json), Err(ExtractError::InvalidOptions(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn source_from_str() {
        assert_eq!("content".parse::<Source>().unwrap(), Source::Content);
        assert!(matches!(
            "url".parse::<Source>(),
            Err(ExtractError::UnknownSource(name)) if name == "url"
        ));
    }

    #[test]
    fn from_names_resolves_every_field() {
        assert_eq!(
            ExtractOptions::from_names("scss", "full", false, "content").unwrap(),
            ExtractOptions::content(Syntax::Scss)
                .with_mode(Mode::Full)
                .with_prefix(false)
        );
    }

    #[test]
    fn from_names_reports_which_name_is_wrong() {
        assert!(matches!(
            ExtractOptions::from_names("less", "simple", true, "file"),
            Err(ExtractError::Config(ConfigError::UnknownSyntax(_)))
        ));
        assert!(matches!(
            ExtractOptions::from_names("css", "verbose", true, "file"),
            Err(ExtractError::Config(ConfigError::UnknownMode(_)))
        ));
        assert!(matches!(
            ExtractOptions::from_names("css", "simple", true, "url"),
            Err(ExtractError::UnknownSource(_))
        ));
    }
}
