use cssnode::{Content, Node, NodeKind};

use super::{wrap_call, wrap_edges};

/// Renders a sequence of value nodes back to text.
///
/// `parent` is the kind of the node that owns `nodes`; pass `None` (or the
/// value node's own kind) for the top level of a declaration value.
///
/// Each child is first decorated for its own kind (a color gains `#`, an
/// interpolation is wrapped in `#{}`) and only then for its parent's kind
/// (parentheses and call wrapping), so `(#fff)` never comes out as `#(fff)`.
pub fn render_value(nodes: &[Node], parent: Option<NodeKind>) -> String {
    let len = nodes.len();
    let mut out = String::new();
    for (index, node) in nodes.iter().enumerate() {
        let text = render_node(node, parent);
        let text = match parent {
            Some(NodeKind::Parentheses) => wrap_edges(text, index, len, "(", ")"),
            Some(NodeKind::Function) => wrap_call(text, index, len),
            _ => text,
        };
        out.push_str(&text);
    }
    out
}

fn render_node(node: &Node, parent: Option<NodeKind>) -> String {
    match &node.content {
        Content::Leaf(text) => {
            let text = match (node.kind, parent) {
                (NodeKind::Space, _) => " ".to_string(),
                (_, Some(NodeKind::Percentage)) => format!("{text}%"),
                _ => text.clone(),
            };
            decorate(text, node.kind, parent)
        }
        Content::Interior(children) if children.is_empty() && node.is(NodeKind::Parentheses) => {
            "()".to_string()
        }
        Content::Interior(children) => {
            decorate(render_value(children, Some(node.kind)), node.kind, parent)
        }
    }
}

/// Sigils a node's own kind adds around its rendered text.
fn decorate(text: String, kind: NodeKind, parent: Option<NodeKind>) -> String {
    match kind {
        NodeKind::Color => format!("#{text}"),
        NodeKind::Interpolation => format!("#{{{text}}}"),
        NodeKind::Ident => match parent {
            Some(NodeKind::Variable) => format!("${text}"),
            Some(NodeKind::CustomProperty) => format!("--{text}"),
            _ => text,
        },
        NodeKind::Stylesheet
        | NodeKind::Ruleset
        | NodeKind::Selector
        | NodeKind::Block
        | NodeKind::Declaration
        | NodeKind::DeclarationDelimiter
        | NodeKind::Property
        | NodeKind::PropertyDelimiter
        | NodeKind::Value
        | NodeKind::CustomProperty
        | NodeKind::Atrule
        | NodeKind::Atkeyword
        | NodeKind::Number
        | NodeKind::Dimension
        | NodeKind::Percentage
        | NodeKind::String
        | NodeKind::Function
        | NodeKind::Arguments
        | NodeKind::Parentheses
        | NodeKind::Variable
        | NodeKind::Operator
        | NodeKind::Important
        | NodeKind::Class
        | NodeKind::Id
        | NodeKind::TypeSelector
        | NodeKind::UniversalSelector
        | NodeKind::ParentSelector
        | NodeKind::ParentSelectorExtension
        | NodeKind::PseudoClass
        | NodeKind::PseudoElement
        | NodeKind::AttributeSelector
        | NodeKind::AttributeName
        | NodeKind::AttributeMatch
        | NodeKind::AttributeValue
        | NodeKind::Combinator
        | NodeKind::Space
        | NodeKind::Delimiter
        | NodeKind::MultilineComment
        | NodeKind::SinglelineComment
        | NodeKind::Raw => text,
    }
}
