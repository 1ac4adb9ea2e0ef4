//! Stylesheet parsing into the [`Node`] tree.
//!
//! - [`parse_stylesheet`]: main entry point
//! - [`Syntax`]: the source dialect (`css`, `scss`, `sass`)
//!
//! ## Submodules
//!
//! - [`tokens`]: nom lexers for identifiers, numbers, strings and comments
//! - `selectors`: selector components (classes, pseudo-classes, attributes, `&`)
//! - `values`: declaration values and at-rule preludes
//! - `sass`: indentation-to-braces rewriting for the indented syntax
//!
//! ## Example
//!
//! ```rust
//! use cssnode::{parse_stylesheet, NodeKind, Syntax};
//!
//! let sheet = parse_stylesheet(":root { --gap: 4px; }", Syntax::Css).unwrap();
//! let ruleset = sheet.first_child().unwrap();
//! assert_eq!(ruleset.kind, NodeKind::Ruleset);
//! ```

mod sass;
mod selectors;
pub mod tokens;
mod values;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Position};
use crate::node::{Node, NodeKind};

/// Stylesheet dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    #[default]
    Css,
    Scss,
    Sass,
}

impl Syntax {
    pub const ALL: [Syntax; 3] = [Syntax::Css, Syntax::Sass, Syntax::Scss];

    pub const fn as_str(self) -> &'static str {
        match self {
            Syntax::Css => "css",
            Syntax::Scss => "scss",
            Syntax::Sass => "sass",
        }
    }

    /// Whether `//` starts a comment.
    const fn has_line_comments(self) -> bool {
        !matches!(self, Syntax::Css)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a syntax name is not one of `css`, `sass`, `scss`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown syntax `{0}`, expected one of: css, sass, scss")]
pub struct UnknownSyntax(pub String);

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(Syntax::Css),
            "scss" => Ok(Syntax::Scss),
            "sass" => Ok(Syntax::Sass),
            other => Err(UnknownSyntax(other.to_string())),
        }
    }
}

/// Parses a stylesheet of the given syntax into a tree rooted at a `stylesheet` node.
///
/// Positions in errors for the indented `sass` syntax refer to the rewritten
/// source, which keeps the original line numbering.
pub fn parse_stylesheet(source: &str, syntax: Syntax) -> Result<Node, ParseError> {
    match syntax {
        Syntax::Sass => {
            let rewritten = sass::to_braces(source);
            Parser::new(&rewritten, syntax).stylesheet()
        }
        Syntax::Css | Syntax::Scss => Parser::new(source, syntax).stylesheet(),
    }
}

pub(crate) struct Parser<'a> {
    source: &'a str,
    syntax: Syntax,
}

type Parsed<'a, T> = Result<(&'a str, T), ParseError>;

impl<'a> Parser<'a> {
    fn new(source: &'a str, syntax: Syntax) -> Self {
        Self { source, syntax }
    }

    pub(crate) fn position(&self, rest: &str) -> Position {
        Position::locate(self.source, self.source.len() - rest.len())
    }

    fn stylesheet(&self) -> Result<Node, ParseError> {
        let (_, children) = self.statements(self.source, false)?;
        Ok(Node::interior(NodeKind::Stylesheet, children))
    }

    /// Statements up to the closing `}` of a block, or to end of input at top level.
    fn statements(&self, mut input: &'a str, in_block: bool) -> Parsed<'a, Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            if input.is_empty() {
                return Ok((input, nodes));
            }
            if input.starts_with('}') {
                if in_block {
                    return Ok((input, nodes));
                }
                return Err(ParseError::UnexpectedCloseBrace(self.position(input)));
            }
            if let Some((rest, node)) = self.trivia(input)? {
                nodes.push(node);
                input = rest;
                continue;
            }
            if let Some(rest) = input.strip_prefix(';') {
                nodes.push(Node::leaf(NodeKind::DeclarationDelimiter, ";"));
                input = rest;
                continue;
            }

            let (rest, node) = if input.starts_with('@') {
                self.atrule(input)?
            } else if opens_block(input) {
                self.ruleset(input)?
            } else {
                self.declaration(input)?
            };
            nodes.push(node);
            input = rest;
        }
    }

    /// Whitespace or a comment.
    pub(crate) fn trivia(&self, input: &'a str) -> Result<Option<(&'a str, Node)>, ParseError> {
        if let Ok((rest, ws)) = tokens::whitespace(input) {
            return Ok(Some((rest, Node::leaf(NodeKind::Space, ws))));
        }
        if input.starts_with("/*") {
            let (rest, text) = tokens::block_comment(input)
                .map_err(|_| ParseError::UnterminatedComment(self.position(input)))?;
            return Ok(Some((rest, Node::leaf(NodeKind::MultilineComment, text))));
        }
        if self.syntax.has_line_comments() && input.starts_with("//") {
            if let Ok((rest, text)) = tokens::line_comment(input) {
                return Ok(Some((rest, Node::leaf(NodeKind::SinglelineComment, text))));
            }
        }
        Ok(None)
    }

    fn block(&self, input: &'a str) -> Parsed<'a, Node> {
        let (rest, children) = self.statements(&input[1..], true)?;
        match rest.strip_prefix('}') {
            Some(rest) => Ok((rest, Node::interior(NodeKind::Block, children))),
            None => Err(ParseError::UnclosedBlock(self.position(input))),
        }
    }

    fn ruleset(&self, mut input: &'a str) -> Parsed<'a, Node> {
        let mut children = Vec::new();
        loop {
            let (rest, selector) = self.selector(input)?;
            children.push(selector);
            input = rest;

            while let Some((rest, node)) = self.trivia(input)? {
                children.push(space_for(node));
                input = rest;
            }

            if let Some(rest) = input.strip_prefix(',') {
                children.push(Node::leaf(NodeKind::Delimiter, ","));
                input = rest;
                while let Some((rest, node)) = self.trivia(input)? {
                    children.push(space_for(node));
                    input = rest;
                }
                continue;
            }
            if input.starts_with('{') {
                let (rest, block) = self.block(input)?;
                children.push(block);
                return Ok((rest, Node::interior(NodeKind::Ruleset, children)));
            }
            return Err(ParseError::Unbalanced {
                delimiter: '{',
                position: self.position(input),
            });
        }
    }

    fn atrule(&self, input: &'a str) -> Parsed<'a, Node> {
        let Ok((mut input, keyword)) = tokens::name(&input[1..]) else {
            return self.raw_statement(input);
        };

        let mut children = vec![Node::interior(
            NodeKind::Atkeyword,
            vec![Node::leaf(NodeKind::Ident, keyword)],
        )];

        let (rest, prelude) = self.value_tokens(input, values::Stop::Prelude)?;
        children.extend(prelude);
        input = rest;

        while let Some((rest, node)) = self.trivia(input)? {
            children.push(node);
            input = rest;
        }

        if input.starts_with('{') {
            let (rest, block) = self.block(input)?;
            children.push(block);
            input = rest;
        }

        Ok((input, Node::interior(NodeKind::Atrule, children)))
    }

    fn declaration(&self, input: &'a str) -> Parsed<'a, Node> {
        let Some((after_property, property)) = property(input) else {
            return self.raw_statement(input);
        };

        let mut children = vec![property];
        let mut rest = after_property;
        if let Ok((after, ws)) = tokens::whitespace(rest) {
            children.push(Node::leaf(NodeKind::Space, ws));
            rest = after;
        }

        let Some(after_colon) = rest.strip_prefix(':') else {
            return self.raw_statement(input);
        };
        children.push(Node::leaf(NodeKind::PropertyDelimiter, ":"));
        rest = after_colon;
        if let Ok((after, ws)) = tokens::whitespace(rest) {
            children.push(Node::leaf(NodeKind::Space, ws));
            rest = after;
        }

        let (rest, value) = self.value_tokens(rest, values::Stop::Declaration)?;
        children.push(Node::interior(NodeKind::Value, value));
        Ok((rest, Node::interior(NodeKind::Declaration, children)))
    }

    /// Anything the parser does not model, kept verbatim up to `;` or `}`.
    fn raw_statement(&self, input: &'a str) -> Parsed<'a, Node> {
        let end = statement_end(input);
        let end = if end == 0 {
            input.chars().next().map_or(0, char::len_utf8)
        } else {
            end
        };
        let text = input[..end].trim_end();
        let rest = &input[text.len()..];
        Ok((rest, Node::leaf(NodeKind::Raw, text)))
    }
}

fn space_for(node: Node) -> Node {
    if node.kind.is_comment() {
        return Node::leaf(NodeKind::Space, " ");
    }
    node
}

fn property(input: &str) -> Option<(&str, Node)> {
    if let Some(after) = input.strip_prefix("--") {
        let (rest, name) = tokens::name(after).unwrap_or((after, ""));
        return Some((rest, Node::leaf(NodeKind::CustomProperty, name)));
    }
    if let Some(after) = input.strip_prefix('$') {
        let (rest, name) = tokens::name(after).ok()?;
        let variable = Node::interior(
            NodeKind::Variable,
            vec![Node::leaf(NodeKind::Ident, name)],
        );
        return Some((rest, Node::interior(NodeKind::Property, vec![variable])));
    }
    let (rest, name) = tokens::ident(input).ok()?;
    Some((
        rest,
        Node::interior(NodeKind::Property, vec![Node::leaf(NodeKind::Ident, name)]),
    ))
}

/// Scans a statement at nesting level 0 and reports whether a `{` opens a block
/// before any `;` or `}` ends it. Custom properties never open blocks.
fn opens_block(input: &str) -> bool {
    if input.starts_with("--") {
        return false;
    }
    matches!(scan_statement(input), (_, Some('{')))
}

/// Byte offset of the first `;` or `}` at nesting level 0, or the input length.
/// A block opened before that point is kept whole.
fn statement_end(input: &str) -> usize {
    match scan_statement(input) {
        (end, Some('{')) => tokens::balanced_len(&input[end..], '{', '}')
            .map_or(input.len(), |len| end + len),
        (end, _) => end,
    }
}

/// Walks `input` skipping strings, comments, parenthesised groups and `#{}`
/// interpolations; stops at the first top-level `{`, `;` or `}`.
fn scan_statement(input: &str) -> (usize, Option<char>) {
    let mut paren_depth = 0usize;
    let mut i = 0;
    while i < input.len() {
        let rest = &input[i..];
        if rest.starts_with("#{") {
            i += tokens::balanced_len(&rest[1..], '{', '}').map_or(rest.len(), |len| len + 1);
            continue;
        }
        if rest.starts_with("/*") {
            i += rest.find("*/").map_or(rest.len(), |end| end + 2);
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        match c {
            '"' | '\'' => {
                i += tokens::quoted(rest).map_or(rest.len(), |(after, _)| rest.len() - after.len());
                continue;
            }
            '(' | '[' => paren_depth += 1,
            ')' | ']' => paren_depth = paren_depth.saturating_sub(1),
            '{' | ';' | '}' if paren_depth == 0 => return (i, Some(c)),
            _ => {}
        }
        i += c.len_utf8();
    }
    (input.len(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_names_round_trip() {
        for syntax in Syntax::ALL {
            assert_eq!(syntax.as_str().parse::<Syntax>(), Ok(syntax));
        }
        assert_eq!(
            "less".parse::<Syntax>(),
            Err(UnknownSyntax("less".to_string()))
        );
    }

    #[test]
    fn block_detection_skips_nested_groups() {
        assert!(opens_block("a:hover { color: red; }"));
        assert!(opens_block("a[href=\"{\"] {"));
        assert!(!opens_block("color: red; }"));
        assert!(!opens_block("width: calc(#{$a} + 1px);"));
        assert!(!opens_block("--x: 1 }"));
    }

    #[test]
    fn statement_end_stops_at_semicolon() {
        assert_eq!(statement_end("+mixin(1); a"), 9);
        assert_eq!(statement_end("foo"), 3);
    }
}
