//! # cssnode - stylesheet trees
//!
//! A small, dialect-aware stylesheet parser that produces a uniform node tree
//! for CSS, SCSS and the indented Sass syntax. The tree keeps every piece of
//! source (whitespace, comments, delimiters) as nodes, so consumers can render
//! subtrees back to text.
//!
//! - [`Node`] / [`NodeKind`] / [`Content`]: the tree model
//! - [`Node::traverse`] / [`Node::traverse_by_kind`]: pre-order walks with depth
//! - [`parse_stylesheet`]: text to tree
//!
//! ## Quick Start
//!
//! ```rust
//! use cssnode::{parse_stylesheet, NodeKind, Syntax};
//!
//! let sheet = parse_stylesheet(".a { --gap: 4px; }", Syntax::Scss).unwrap();
//!
//! let mut names = Vec::new();
//! sheet.traverse_by_kind(NodeKind::CustomProperty, |visit| {
//!     names.push(visit.node.text().unwrap_or_default().to_string());
//! });
//! assert_eq!(names, vec!["gap"]);
//! ```
//!
//! ## Not Yet Implemented
//!
//! - Sass `=mixin` / `+include` shorthands are kept as raw statements
//! - Escapes inside identifiers (`.a\:b`)

pub mod error;
pub mod node;
pub mod parser;
pub mod traverse;

pub use error::{ParseError, Position};
pub use node::{Content, Node, NodeKind};
pub use parser::{Syntax, UnknownSyntax, parse_stylesheet};
pub use traverse::Visit;
