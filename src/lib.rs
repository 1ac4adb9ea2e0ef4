//! Extracts CSS custom properties (`--name: value`) from CSS, SCSS and Sass
//! stylesheets into an ordered map of property key to declared values.
//!
//! ```rust
//! use custom_property_extract::{extract, ExtractOptions, Mode, Syntax};
//!
//! let source = "\
//! :root { --gap: 4px; }
//! @media print { :root { --gap: 0; } }
//! ";
//! let options = ExtractOptions::content(Syntax::Css);
//! let result = extract(source, &options).unwrap();
//! assert_eq!(result.values("--gap"), vec!["4px", "0"]);
//!
//! let full = extract(source, &options.with_mode(Mode::Full)).unwrap();
//! let second = full.get("--gap").unwrap()[1].record().unwrap();
//! assert_eq!(second.media.as_deref(), Some("print"));
//! ```
//!
//! The parsing lives in [`cssnode`] and the extraction engine in
//! [`propextract`]; this crate adds option handling and source loading.

pub mod error;
pub mod loader;
pub mod options;

pub use cssnode::Syntax;
pub use error::{ExtractError, Result};
pub use options::{ExtractOptions, Source};
pub use propextract::{CustomPropertyRecord, ExtractResult, Mode, PropertyValue};

/// Loads, parses and extracts custom properties from `source` according to
/// `options`.
pub fn extract(source: &str, options: &ExtractOptions) -> Result<ExtractResult> {
    let text = loader::load(source, options.source)?;
    let sheet = cssnode::parse_stylesheet(&text, options.syntax)?;
    let result = propextract::extract_tree(&sheet, &options.config());
    log::debug!(
        "extracted {} custom properties ({} mode)",
        result.len(),
        options.mode
    );
    Ok(result)
}

/// Like [`extract`], with options given as a JSON object.
pub fn extract_with_json(source: &str, options: &str) -> Result<ExtractResult> {
    extract(source, &ExtractOptions::from_json(options)?)
}
