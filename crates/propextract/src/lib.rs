//! # propextract - custom property extraction
//!
//! Walks a [`cssnode`] tree and collects every custom-property declaration
//! (`--name: value`) into an ordered map from property key to the values it
//! was declared with.
//!
//! Two modes are available:
//!
//! - [`Mode::Simple`]: bare rendered values
//! - [`Mode::Full`]: values with the composed selector, an optional name taken
//!   from a preceding `@case` comment, and the enclosing `@media` condition
//!
//! ## Quick Start
//!
//! ```rust
//! use cssnode::{parse_stylesheet, Syntax};
//! use propextract::{extract_tree, CustomPropertyRecord, ExtractConfig, Mode, PropertyValue};
//!
//! let source = ".card { &.active { --tint: #fff; } }";
//! let sheet = parse_stylesheet(source, Syntax::Scss).unwrap();
//!
//! let simple = extract_tree(&sheet, &ExtractConfig::default());
//! assert_eq!(simple.values("--tint"), vec!["#fff"]);
//!
//! let full = extract_tree(&sheet, &ExtractConfig::default().with_mode(Mode::Full));
//! assert_eq!(
//!     full.get("--tint").unwrap(),
//!     &[PropertyValue::Detailed(
//!         CustomPropertyRecord::new("#fff").with_selector(".card.active")
//!     )]
//! );
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod media;
pub mod render;
pub mod scope;
pub mod walker;

pub use config::{ExtractConfig, Mode};
pub use error::ConfigError;
pub use extract::{
    CustomPropertyRecord, ExtractResult, PropertyValue, extract_tree, full_extract, simple_extract,
};
pub use media::{MEDIA_DEPTH_DISCOUNT, MediaContext, MediaStack};
pub use render::{render_selector, render_value};
pub use scope::compose;
pub use walker::{Occurrence, ScopeWalker};
