//! The scope state machine driven by a pre-order traversal.
//!
//! The walker sees nodes one at a time, in document order, together with
//! their parent and depth. It keeps just enough state to know, at each
//! custom-property declaration, which composed selector scope, pending
//! `@case` name and `@media` condition apply to it.
//!
//! Scope selection for a ruleset at depth `d`, given the depth `p` of the
//! previous ruleset:
//!
//! - `d < p`: the traversal climbed back out; start from an empty scope.
//! - `d == p`: a sibling; reuse the scope the previous ruleset was composed
//!   from, unless this is the first ruleset directly inside the active media
//!   block.
//! - `d > p`: a child; compose from the previous ruleset's scope, unless the
//!   previous ruleset was itself the active media rule's level.

use std::mem;

use cssnode::{Node, NodeKind, Visit};

use crate::media::{MEDIA_DEPTH_DISCOUNT, MediaStack, discounted_depth};
use crate::scope::compose;

/// Marker that names the next custom property, e.g. `/* @case Primary */`.
pub const NAME_MARKER: &str = "@case";

/// A custom-property declaration together with the context it was found in.
#[derive(Clone, Debug, PartialEq)]
pub struct Occurrence<'a> {
    /// The `customProperty` node holding the property name.
    pub property: &'a Node,
    /// The declaration the property belongs to, if any.
    pub declaration: Option<&'a Node>,
    pub selector: Option<String>,
    pub name: Option<String>,
    pub media: Option<String>,
}

impl Occurrence<'_> {
    /// Property name without the leading `--`.
    pub fn property_name(&self) -> String {
        property_name(self.property)
    }
}

/// Name of a `customProperty` node without the leading `--`.
///
/// Declarations hold the name as a leaf; the `var(--x)` form wraps it in an
/// ident.
pub fn property_name(node: &Node) -> String {
    match node.text() {
        Some(text) => text.to_string(),
        None => node.flat_text(),
    }
}

#[derive(Debug, Default)]
pub struct ScopeWalker {
    /// Depth of the most recent ruleset; `None` before the first one.
    previous_depth: Option<usize>,
    /// Scope the most recent ruleset was composed from.
    previous_scope: Vec<String>,
    /// Scope of the most recent ruleset.
    current_scope: Vec<String>,
    media: MediaStack,
    pending_name: Option<String>,
}

impl ScopeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one traversal step. Returns the occurrence when the node is a
    /// custom-property declaration.
    pub fn visit<'a>(&mut self, visit: Visit<'a>) -> Option<Occurrence<'a>> {
        let Visit {
            node,
            parent,
            depth,
            ..
        } = visit;

        for left in self.media.leave(depth) {
            log::debug!("leaving @media {} at depth {}", left.condition, left.depth);
            self.previous_depth = discounted_depth(self.previous_depth, &left);
        }
        if self.media.enter(node, depth) {
            log::debug!(
                "entering @media {} at depth {depth}",
                self.media.condition().unwrap_or_default()
            );
        }

        if node.is(NodeKind::Ruleset) {
            self.enter_ruleset(node, depth);
            return None;
        }

        if node.kind.is_comment() {
            if let Some(name) = node.text().and_then(comment_name) {
                log::trace!("pending name {name:?}");
                self.pending_name = Some(name);
            }
            return None;
        }

        if node.is(NodeKind::CustomProperty) && !parent.is_some_and(|p| p.is(NodeKind::Arguments)) {
            return Some(self.occurrence(node, parent));
        }

        None
    }

    /// The selector alternatives currently in scope.
    pub fn current_scope(&self) -> &[String] {
        &self.current_scope
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    pub fn media_condition(&self) -> Option<&str> {
        self.media.condition()
    }

    fn enter_ruleset(&mut self, ruleset: &Node, depth: usize) {
        let media_depth = self.media.active_depth();
        let base = match self.previous_depth {
            Some(previous) if depth < previous => Vec::new(),
            Some(previous) if depth == previous => {
                if media_depth.is_some_and(|media| media + MEDIA_DEPTH_DISCOUNT == depth) {
                    Vec::new()
                } else {
                    mem::take(&mut self.previous_scope)
                }
            }
            previous => {
                if media_depth.is_some() && media_depth == previous {
                    Vec::new()
                } else {
                    self.current_scope.clone()
                }
            }
        };

        self.current_scope = compose(&base, ruleset.children());
        log::debug!("ruleset at depth {depth}: {:?}", self.current_scope);
        self.previous_scope = base;
        self.previous_depth = Some(depth);
    }

    fn occurrence<'a>(&mut self, property: &'a Node, parent: Option<&'a Node>) -> Occurrence<'a> {
        let selector = self.current_scope.join(", ");
        let selector = selector.trim();
        Occurrence {
            property,
            declaration: parent.filter(|p| p.is(NodeKind::Declaration)),
            selector: (!selector.is_empty()).then(|| selector.to_string()),
            name: self.pending_name.take().filter(|name| !name.is_empty()),
            media: self.media.condition().map(str::to_string),
        }
    }
}

/// The name a comment assigns to the next custom property, if it carries the
/// marker.
pub fn comment_name(text: &str) -> Option<String> {
    if !text.contains(NAME_MARKER) {
        return None;
    }
    let name = text.replacen(NAME_MARKER, "", 1).replacen("* ", "", 1);
    Some(name.trim().to_string())
}

/// Runs a fresh walker over `root` and collects every occurrence.
pub fn occurrences(root: &Node) -> Vec<Occurrence<'_>> {
    let mut walker = ScopeWalker::new();
    let mut found = Vec::new();
    root.traverse(|visit| {
        if let Some(occurrence) = walker.visit(visit) {
            found.push(occurrence);
        }
    });
    found
}
