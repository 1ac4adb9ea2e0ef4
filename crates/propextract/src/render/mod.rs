//! Turning value and selector subtrees back into source-like text.
//!
//! Both renderers share one recursion: leaves produce their literal text,
//! interior nodes render their children with their own kind as the parent
//! context, and each rendered child is then decorated according to its own
//! kind (sigils such as `#`, `.`, `$`) and its parent's kind (edge wrapping).

pub mod selector;
pub mod value;

pub use selector::render_selector;
pub use value::render_value;

/// Prefixes `open` to the first item and appends `close` to the last one.
/// A single item gets both.
pub(crate) fn wrap_edges(text: String, index: usize, len: usize, open: &str, close: &str) -> String {
    let mut out = text;
    if index == 0 {
        out.insert_str(0, open);
    }
    if index + 1 == len {
        out.push_str(close);
    }
    out
}

/// Appends `(` to the first item (the function name) and `)` to the last one.
pub(crate) fn wrap_call(text: String, index: usize, len: usize) -> String {
    let mut out = text;
    if index == 0 {
        out.push('(');
    }
    if index + 1 == len {
        out.push(')');
    }
    out
}
