use cssnode::{Content, Node, NodeKind};

use super::wrap_edges;

/// Renders a sequence of selector nodes back to text.
pub fn render_selector(nodes: &[Node], parent: Option<NodeKind>) -> String {
    let len = nodes.len();
    let mut out = String::new();
    for (index, node) in nodes.iter().enumerate() {
        let text = render_node(node);
        let text = match parent {
            Some(NodeKind::Arguments) => wrap_edges(text, index, len, "(", ")"),
            Some(NodeKind::AttributeSelector) => wrap_edges(text, index, len, "[", "]"),
            _ => text,
        };
        out.push_str(&text);
    }
    out
}

fn render_node(node: &Node) -> String {
    let text = match &node.content {
        Content::Leaf(_) if node.is(NodeKind::Space) => " ".to_string(),
        Content::Leaf(text) => text.clone(),
        // `:not()` and friends keep their parentheses even when empty.
        Content::Interior(children) if children.is_empty() && node.is(NodeKind::Arguments) => {
            "()".to_string()
        }
        Content::Interior(children) => render_selector(children, Some(node.kind)),
    };
    match node.kind {
        NodeKind::Class => format!(".{text}"),
        NodeKind::Id => format!("#{text}"),
        NodeKind::PseudoElement => format!("::{text}"),
        NodeKind::PseudoClass => format!(":{text}"),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(kind: NodeKind, name: &str) -> Node {
        Node::interior(kind, vec![Node::leaf(NodeKind::Ident, name)])
    }

    #[test]
    fn compound_prefixes() {
        let nodes = [
            named(NodeKind::TypeSelector, "a"),
            named(NodeKind::Class, "b"),
            named(NodeKind::Id, "c"),
            named(NodeKind::PseudoClass, "hover"),
            named(NodeKind::PseudoElement, "after"),
        ];
        assert_eq!(render_selector(&nodes, None), "a.b#c:hover::after");
    }

    #[test]
    fn empty_pseudo_arguments() {
        let not = Node::interior(
            NodeKind::PseudoClass,
            vec![
                Node::leaf(NodeKind::Ident, "not"),
                Node::interior(NodeKind::Arguments, Vec::new()),
            ],
        );
        assert_eq!(render_selector(&[not], None), ":not()");
    }
}
