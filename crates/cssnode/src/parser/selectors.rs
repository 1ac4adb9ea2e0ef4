//! Selector parsing.
//!
//! A `selector` node holds one comma-free alternative. Components:
//!
//! - `typeSelector`, `class`, `id`, `universalSelector`
//! - `pseudoClass` / `pseudoElement`, with an `arguments` child for `:not(.a)` or
//!   `:nth-child(2n+1)`
//! - `attributeSelector` (`[type="text" i]`)
//! - `parentSelector` (`&`) and `parentSelectorExtension` (`&-suffix`)
//! - `combinator` (`>`, `+`, `~`) and `space`
//!
//! Trailing whitespace is left to the enclosing ruleset.

use super::{Parsed, Parser, tokens};
use crate::error::ParseError;
use crate::node::{Node, NodeKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    Selector,
    Arguments,
}

impl Context {
    fn ends_at(self, c: char) -> bool {
        match self {
            Context::Selector => matches!(c, ',' | '{' | '}' | ';'),
            Context::Arguments => c == ')',
        }
    }
}

const ATTRIBUTE_MATCHERS: [&str; 6] = ["~=", "|=", "^=", "$=", "*=", "="];

impl<'a> Parser<'a> {
    pub(super) fn selector(&self, input: &'a str) -> Parsed<'a, Node> {
        let (rest, parts) = self.selector_parts(input, Context::Selector)?;
        Ok((rest, Node::interior(NodeKind::Selector, parts)))
    }

    fn selector_parts(&self, mut input: &'a str, context: Context) -> Parsed<'a, Vec<Node>> {
        let mut parts = Vec::new();
        while let Some(c) = input.chars().next() {
            if context.ends_at(c) {
                break;
            }
            if c.is_whitespace() || input.starts_with("/*") {
                let rest = self.skip_trivia(input)?;
                let next = rest.chars().next();
                if context == Context::Selector && next.is_none_or(|n| context.ends_at(n)) {
                    break;
                }
                let consumed = &input[..input.len() - rest.len()];
                parts.push(Node::leaf(NodeKind::Space, consumed));
                input = rest;
                continue;
            }
            input = self.selector_component(input, &mut parts)?;
        }
        Ok((input, parts))
    }

    fn skip_trivia(&self, mut input: &'a str) -> Result<&'a str, ParseError> {
        loop {
            if let Ok((rest, _)) = tokens::whitespace(input) {
                input = rest;
            } else if input.starts_with("/*") {
                let (rest, _) = tokens::block_comment(input)
                    .map_err(|_| ParseError::UnterminatedComment(self.position(input)))?;
                input = rest;
            } else {
                return Ok(input);
            }
        }
    }

    fn selector_component(&self, input: &'a str, parts: &mut Vec<Node>) -> Result<&'a str, ParseError> {
        let Some(c) = input.chars().next() else {
            return Ok(input);
        };
        let after = &input[c.len_utf8()..];

        match c {
            '>' | '+' | '~' => {
                parts.push(Node::leaf(NodeKind::Combinator, c.to_string()));
                return Ok(after);
            }
            ',' => {
                parts.push(Node::leaf(NodeKind::Delimiter, ","));
                return Ok(after);
            }
            '*' => {
                parts.push(Node::leaf(NodeKind::UniversalSelector, "*"));
                return Ok(after);
            }
            '&' => {
                parts.push(Node::leaf(NodeKind::ParentSelector, "&"));
                if let Ok((rest, suffix)) = tokens::name(after) {
                    parts.push(Node::interior(
                        NodeKind::ParentSelectorExtension,
                        vec![Node::leaf(NodeKind::Ident, suffix)],
                    ));
                    return Ok(rest);
                }
                return Ok(after);
            }
            '.' => {
                if let Ok((rest, name)) = tokens::name(after) {
                    parts.push(named(NodeKind::Class, name));
                    return Ok(rest);
                }
            }
            '#' if after.starts_with('{') => {
                let len = tokens::balanced_len(after, '{', '}').ok_or(ParseError::Unbalanced {
                    delimiter: '{',
                    position: self.position(after),
                })?;
                let end = 1 + len;
                parts.push(Node::leaf(NodeKind::Raw, &input[..end]));
                return Ok(&input[end..]);
            }
            '#' => {
                if let Ok((rest, name)) = tokens::name(after) {
                    parts.push(named(NodeKind::Id, name));
                    return Ok(rest);
                }
            }
            ':' => {
                let (kind, after_colons) = match after.strip_prefix(':') {
                    Some(rest) => (NodeKind::PseudoElement, rest),
                    None => (NodeKind::PseudoClass, after),
                };
                if let Ok((rest, name)) = tokens::name(after_colons) {
                    let mut children = vec![Node::leaf(NodeKind::Ident, name)];
                    let rest = if rest.starts_with('(') {
                        let (rest, arguments) = self.selector_arguments(rest)?;
                        children.push(arguments);
                        rest
                    } else {
                        rest
                    };
                    parts.push(Node::interior(kind, children));
                    return Ok(rest);
                }
            }
            '[' => {
                let (rest, attribute) = self.attribute_selector(input)?;
                parts.push(attribute);
                return Ok(rest);
            }
            '"' | '\'' => {
                let (rest, text) = tokens::quoted(input)
                    .map_err(|_| ParseError::UnterminatedString(self.position(input)))?;
                parts.push(Node::leaf(NodeKind::String, text));
                return Ok(rest);
            }
            _ => {
                if let Ok((rest, name)) = tokens::name(input) {
                    parts.push(named(NodeKind::TypeSelector, name));
                    return Ok(rest);
                }
            }
        }

        parts.push(Node::leaf(NodeKind::Raw, c.to_string()));
        Ok(after)
    }

    fn selector_arguments(&self, input: &'a str) -> Parsed<'a, Node> {
        let (rest, parts) = self.selector_parts(&input[1..], Context::Arguments)?;
        match rest.strip_prefix(')') {
            Some(rest) => Ok((rest, Node::interior(NodeKind::Arguments, parts))),
            None => Err(ParseError::Unbalanced {
                delimiter: '(',
                position: self.position(input),
            }),
        }
    }

    fn attribute_selector(&self, input: &'a str) -> Parsed<'a, Node> {
        let len = tokens::balanced_len(input, '[', ']').ok_or(ParseError::Unbalanced {
            delimiter: '[',
            position: self.position(input),
        })?;
        let inner = &input[1..len - 1];
        let rest = &input[len..];

        let Some((matcher, at)) = find_matcher(inner) else {
            let children = vec![named(NodeKind::AttributeName, inner.trim())];
            return Ok((rest, Node::interior(NodeKind::AttributeSelector, children)));
        };

        let mut children = vec![
            named(NodeKind::AttributeName, inner[..at].trim()),
            Node::leaf(NodeKind::AttributeMatch, matcher),
        ];

        let value = inner[at + matcher.len()..].trim();
        let (flags, value_node) = match tokens::quoted(value) {
            Ok((flags, text)) => (flags, Node::leaf(NodeKind::String, text)),
            Err(_) => {
                let end = value.find(char::is_whitespace).unwrap_or(value.len());
                (&value[end..], Node::leaf(NodeKind::Ident, &value[..end]))
            }
        };
        children.push(Node::interior(NodeKind::AttributeValue, vec![value_node]));

        let flags = flags.trim();
        if !flags.is_empty() {
            children.push(Node::leaf(NodeKind::Raw, format!(" {flags}")));
        }
        Ok((rest, Node::interior(NodeKind::AttributeSelector, children)))
    }
}

fn named(kind: NodeKind, name: &str) -> Node {
    Node::interior(kind, vec![Node::leaf(NodeKind::Ident, name)])
}

/// Leftmost attribute matcher outside quotes, preferring two-character forms.
fn find_matcher(inner: &str) -> Option<(&'static str, usize)> {
    let quote = inner.find(['"', '\'']).unwrap_or(inner.len());
    let eq = inner[..quote].find('=')?;
    let name = &inner[..eq];
    ATTRIBUTE_MATCHERS
        .iter()
        .filter(|m| m.len() == 2)
        .find(|m| name.ends_with(&m[..1]))
        .map(|m| (*m, eq - 1))
        .or(Some(("=", eq)))
}
