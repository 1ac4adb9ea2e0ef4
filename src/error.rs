use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not read stylesheet {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stylesheet parse error: {0}")]
    Parse(#[from] cssnode::ParseError),

    #[error("invalid options: {0}")]
    Config(#[from] propextract::ConfigError),

    /// The source kind was neither `file` nor `content`.
    #[error("unknown source `{0}`, expected one of: file, content")]
    UnknownSource(String),

    #[error("malformed options object: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
