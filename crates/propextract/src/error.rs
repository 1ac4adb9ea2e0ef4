//! Error types for extraction settings.
//!
//! Extraction itself never fails; only turning user-supplied names into a
//! resolved [`ExtractConfig`](crate::ExtractConfig) can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownSyntax(#[from] cssnode::UnknownSyntax),

    /// The mode was neither `simple` nor `full`.
    #[error("unknown mode `{0}`, expected one of: simple, full")]
    UnknownMode(String),
}
