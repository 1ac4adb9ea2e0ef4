//! Tracking which `@media` block the traversal is inside.
//!
//! Media rules are kept on a stack so that leaving an inner `@media` block
//! restores the condition of the enclosing one. Entries are popped as soon as
//! the traversal reaches a node at or above the at-rule's own depth.

use cssnode::{Node, NodeKind};

use crate::render::render_value;

/// Levels between an `@media` rule and the rulesets in its block
/// (the at-rule's block, then the ruleset itself).
pub const MEDIA_DEPTH_DISCOUNT: usize = 2;

/// An `@media` rule the traversal is currently inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaContext {
    /// Rendered prelude, e.g. `(max-width: 100px)`.
    pub condition: String,
    /// Depth of the at-rule node.
    pub depth: usize,
}

#[derive(Debug, Default)]
pub struct MediaStack {
    entries: Vec<MediaContext>,
}

impl MediaStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The innermost media rule still in effect.
    pub fn active(&self) -> Option<&MediaContext> {
        self.entries.last()
    }

    pub fn active_depth(&self) -> Option<usize> {
        self.active().map(|media| media.depth)
    }

    pub fn condition(&self) -> Option<&str> {
        self.active().map(|media| media.condition.as_str())
    }

    /// Pops every media rule a node at `depth` is no longer inside, innermost
    /// first.
    pub fn leave(&mut self, depth: usize) -> Vec<MediaContext> {
        let mut left = Vec::new();
        while self.entries.last().is_some_and(|media| media.depth >= depth) {
            if let Some(media) = self.entries.pop() {
                left.push(media);
            }
        }
        left
    }

    /// Pushes `node` if it is an `@media` rule. Returns whether it was.
    pub fn enter(&mut self, node: &Node, depth: usize) -> bool {
        if !is_media_rule(node) {
            return false;
        }
        self.entries.push(MediaContext {
            condition: media_condition(node),
            depth,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `node` is an at-rule whose keyword is `media`.
pub fn is_media_rule(node: &Node) -> bool {
    node.is(NodeKind::Atrule)
        && node
            .child(NodeKind::Atkeyword)
            .and_then(|keyword| keyword.child(NodeKind::Ident))
            .and_then(Node::text)
            .is_some_and(|name| name.eq_ignore_ascii_case("media"))
}

/// The at-rule's children rendered as value text, without its keyword and
/// block, trimmed.
pub fn media_condition(node: &Node) -> String {
    let prelude: Vec<Node> = node
        .children()
        .iter()
        .filter(|child| !matches!(child.kind, NodeKind::Atkeyword | NodeKind::Block))
        .cloned()
        .collect();
    render_value(&prelude, Some(NodeKind::Atrule)).trim().to_string()
}

/// Previous ruleset depth after leaving the media block `left`.
///
/// A ruleset inside a media block is two levels deeper than a sibling of the
/// at-rule would be, so the recorded depth is shifted back by that amount.
/// When no ruleset inside the block was ever recorded (the recorded depth is
/// not below the at-rule) the depth is left alone. `None` stands for "before
/// any ruleset".
pub fn discounted_depth(previous: Option<usize>, left: &MediaContext) -> Option<usize> {
    match previous {
        Some(depth) if depth > left.depth => depth.checked_sub(MEDIA_DEPTH_DISCOUNT),
        other => other,
    }
}
