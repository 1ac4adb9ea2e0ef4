//! Stylesheet tree nodes.
//!
//! A [`Node`] is either a leaf carrying literal source text or an interior node
//! carrying an ordered list of children. The [`NodeKind`] tag says what the node
//! represents; consumers branch on [`Content`] first and only then on the kind.
//!
//! ## Tree shape
//!
//! ```text
//! stylesheet
//! └── ruleset
//!     ├── selector ── class ── ident "a"
//!     ├── space " "
//!     └── block
//!         └── declaration
//!             ├── customProperty "x"
//!             ├── propertyDelimiter ":"
//!             ├── space " "
//!             └── value ── number "1"
//! ```
//!
//! A ruleset nested inside another ruleset therefore sits two levels deeper than
//! its parent (ruleset, block, ruleset), and the same holds for a ruleset inside
//! an `@media` block (atrule, block, ruleset).

use std::fmt;

/// Every kind of node the parser can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Stylesheet,
    Ruleset,
    Selector,
    Block,
    Declaration,
    DeclarationDelimiter,
    Property,
    PropertyDelimiter,
    Value,
    CustomProperty,
    Atrule,
    Atkeyword,
    Ident,
    Number,
    Dimension,
    Percentage,
    Color,
    String,
    Function,
    Arguments,
    Parentheses,
    Variable,
    Interpolation,
    Operator,
    Important,
    Class,
    Id,
    TypeSelector,
    UniversalSelector,
    ParentSelector,
    ParentSelectorExtension,
    PseudoClass,
    PseudoElement,
    AttributeSelector,
    AttributeName,
    AttributeMatch,
    AttributeValue,
    Combinator,
    Space,
    Delimiter,
    MultilineComment,
    SinglelineComment,
    /// Source text the parser kept without classifying it.
    Raw,
}

impl NodeKind {
    /// The camelCase tag name, as used in debug dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Stylesheet => "stylesheet",
            NodeKind::Ruleset => "ruleset",
            NodeKind::Selector => "selector",
            NodeKind::Block => "block",
            NodeKind::Declaration => "declaration",
            NodeKind::DeclarationDelimiter => "declarationDelimiter",
            NodeKind::Property => "property",
            NodeKind::PropertyDelimiter => "propertyDelimiter",
            NodeKind::Value => "value",
            NodeKind::CustomProperty => "customProperty",
            NodeKind::Atrule => "atrule",
            NodeKind::Atkeyword => "atkeyword",
            NodeKind::Ident => "ident",
            NodeKind::Number => "number",
            NodeKind::Dimension => "dimension",
            NodeKind::Percentage => "percentage",
            NodeKind::Color => "color",
            NodeKind::String => "string",
            NodeKind::Function => "function",
            NodeKind::Arguments => "arguments",
            NodeKind::Parentheses => "parentheses",
            NodeKind::Variable => "variable",
            NodeKind::Interpolation => "interpolation",
            NodeKind::Operator => "operator",
            NodeKind::Important => "important",
            NodeKind::Class => "class",
            NodeKind::Id => "id",
            NodeKind::TypeSelector => "typeSelector",
            NodeKind::UniversalSelector => "universalSelector",
            NodeKind::ParentSelector => "parentSelector",
            NodeKind::ParentSelectorExtension => "parentSelectorExtension",
            NodeKind::PseudoClass => "pseudoClass",
            NodeKind::PseudoElement => "pseudoElement",
            NodeKind::AttributeSelector => "attributeSelector",
            NodeKind::AttributeName => "attributeName",
            NodeKind::AttributeMatch => "attributeMatch",
            NodeKind::AttributeValue => "attributeValue",
            NodeKind::Combinator => "combinator",
            NodeKind::Space => "space",
            NodeKind::Delimiter => "delimiter",
            NodeKind::MultilineComment => "multilineComment",
            NodeKind::SinglelineComment => "singlelineComment",
            NodeKind::Raw => "raw",
        }
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, NodeKind::MultilineComment | NodeKind::SinglelineComment)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node payload: literal text for leaves, ordered children otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Leaf(String),
    Interior(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub content: Content,
}

impl Node {
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            content: Content::Leaf(text.into()),
        }
    }

    pub fn interior(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            content: Content::Interior(children),
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Leaf text, or `None` for interior nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Leaf(text) => Some(text),
            Content::Interior(_) => None,
        }
    }

    /// Children of an interior node; leaves have none.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Interior(children) => children,
        }
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children().first()
    }

    /// First direct child of the given kind.
    pub fn child(&self, kind: NodeKind) -> Option<&Node> {
        self.children().iter().find(|child| child.is(kind))
    }

    /// Concatenation of every leaf below this node, in document order.
    ///
    /// This is the raw text of the subtree without any re-rendering; useful for
    /// diagnostics and for keys of nodes that carry no other meaning.
    pub fn flat_text(&self) -> String {
        let mut out = String::new();
        self.push_flat_text(&mut out);
        out
    }

    fn push_flat_text(&self, out: &mut String) {
        match &self.content {
            Content::Leaf(text) => out.push_str(text),
            Content::Interior(children) => {
                for child in children {
                    child.push_flat_text(out);
                }
            }
        }
    }
}
