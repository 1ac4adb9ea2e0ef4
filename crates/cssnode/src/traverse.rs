//! Pre-order traversal primitives.
//!
//! Two walks are provided:
//!
//! - [`Node::traverse`] visits every node with its index, parent and depth.
//! - [`Node::traverse_by_kind`] visits only nodes of one kind.
//!
//! The root is visited at depth 0 with no parent and index 0. Every level below
//! adds one to the depth, so depth is plain tree depth.

use crate::node::{Node, NodeKind};

/// One step of a traversal.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a Node>,
    pub index: usize,
    pub depth: usize,
}

impl Node {
    /// Visits this node and every descendant in document (pre-)order.
    pub fn traverse<'a, F>(&'a self, mut callback: F)
    where
        F: FnMut(Visit<'a>),
    {
        walk(self, None, 0, 0, &mut callback);
    }

    /// Visits only the nodes of `kind`, in document order.
    pub fn traverse_by_kind<'a, F>(&'a self, kind: NodeKind, mut callback: F)
    where
        F: FnMut(Visit<'a>),
    {
        self.traverse(|visit| {
            if visit.node.is(kind) {
                callback(visit);
            }
        });
    }
}

fn walk<'a, F>(node: &'a Node, parent: Option<&'a Node>, index: usize, depth: usize, callback: &mut F)
where
    F: FnMut(Visit<'a>),
{
    callback(Visit {
        node,
        parent,
        index,
        depth,
    });
    for (child_index, child) in node.children().iter().enumerate() {
        walk(child, Some(node), child_index, depth + 1, callback);
    }
}
