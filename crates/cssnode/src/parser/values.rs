//! Value tokenizing for declarations and at-rule preludes.
//!
//! Produces a flat list of value nodes, nesting only where the source nests:
//! `function > arguments`, `parentheses`, `interpolation`, and the small
//! wrappers `percentage > number`, `dimension > (number, ident)`,
//! `variable > ident`, `customProperty > ident`.

use super::{Parsed, Parser, tokens};
use crate::error::ParseError;
use crate::node::{Node, NodeKind};

use nom::bytes::complete::take_while1;

/// Where a run of value tokens ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Stop {
    /// `;` or `}` (declaration value).
    Declaration,
    /// `{`, `;` or `}` (at-rule prelude).
    Prelude,
    /// `)` of a function call or parenthesised group.
    Paren,
    /// `}` of a `#{...}` interpolation.
    Interpolation,
}

impl Stop {
    fn ends_at(self, c: char) -> bool {
        match self {
            Stop::Declaration => matches!(c, ';' | '}'),
            Stop::Prelude => matches!(c, '{' | ';' | '}'),
            Stop::Paren => c == ')',
            Stop::Interpolation => c == '}',
        }
    }

    /// Top-level runs leave trailing whitespace to the enclosing block.
    fn trims_trailing(self) -> bool {
        matches!(self, Stop::Declaration | Stop::Prelude)
    }
}

const OPERATORS: &[char] = &['/', '*', '+', '-', '=', ':', '<', '>', '%', '~', '^', '|', '&'];

impl<'a> Parser<'a> {
    pub(super) fn value_tokens(&self, mut input: &'a str, stop: Stop) -> Parsed<'a, Vec<Node>> {
        let mut nodes = Vec::new();
        while let Some(c) = input.chars().next() {
            if stop.ends_at(c) {
                break;
            }
            if let Ok((rest, ws)) = tokens::whitespace(input) {
                let ends = rest.chars().next().is_none_or(|next| stop.ends_at(next));
                if stop.trims_trailing() && ends {
                    break;
                }
                nodes.push(Node::leaf(NodeKind::Space, ws));
                input = rest;
                continue;
            }
            let (rest, node) = self.value_token(input)?;
            nodes.push(node);
            input = rest;
        }
        Ok((input, nodes))
    }

    fn value_token(&self, input: &'a str) -> Parsed<'a, Node> {
        let Some(c) = input.chars().next() else {
            return Ok((input, Node::leaf(NodeKind::Raw, "")));
        };
        let after = &input[c.len_utf8()..];

        if input.starts_with("/*") {
            let (rest, _) = tokens::block_comment(input)
                .map_err(|_| ParseError::UnterminatedComment(self.position(input)))?;
            let text = &input[..input.len() - rest.len()];
            return Ok((rest, Node::leaf(NodeKind::Raw, text)));
        }

        match c {
            '"' | '\'' => {
                let (rest, text) = tokens::quoted(input)
                    .map_err(|_| ParseError::UnterminatedString(self.position(input)))?;
                return Ok((rest, Node::leaf(NodeKind::String, text)));
            }
            '#' if after.starts_with('{') => {
                let (rest, inner) = self.value_tokens(&after[1..], Stop::Interpolation)?;
                let rest = self.closing(rest, '}', '{', after)?;
                return Ok((rest, Node::interior(NodeKind::Interpolation, inner)));
            }
            '#' => {
                if let Ok((rest, hex)) = tokens::name(after) {
                    return Ok((rest, Node::leaf(NodeKind::Color, hex)));
                }
            }
            '$' => {
                if let Ok((rest, name)) = tokens::name(after) {
                    return Ok((rest, wrapped_ident(NodeKind::Variable, name)));
                }
            }
            '-' if after.starts_with('-') => {
                if let Ok((rest, name)) = tokens::name(&after[1..]) {
                    return Ok((rest, wrapped_ident(NodeKind::CustomProperty, name)));
                }
            }
            '!' => {
                if let Ok((rest, flag)) = tokens::ident(after.trim_start()) {
                    let text = &input[..input.len() - rest.len()];
                    let kind = if flag.eq_ignore_ascii_case("important") {
                        NodeKind::Important
                    } else {
                        NodeKind::Raw
                    };
                    return Ok((rest, Node::leaf(kind, text)));
                }
            }
            '(' => {
                let (rest, inner) = self.value_tokens(after, Stop::Paren)?;
                let rest = self.closing(rest, ')', '(', input)?;
                return Ok((rest, Node::interior(NodeKind::Parentheses, inner)));
            }
            // Custom properties may hold arbitrary brace blocks (`--x: { a: b }`).
            '{' => {
                let len = tokens::balanced_len(input, '{', '}').ok_or(ParseError::Unbalanced {
                    delimiter: '{',
                    position: self.position(input),
                })?;
                return Ok((&input[len..], Node::leaf(NodeKind::Raw, &input[..len])));
            }
            ',' => return Ok((after, Node::leaf(NodeKind::Delimiter, ","))),
            _ => {}
        }

        if let Ok((rest, number)) = tokens::number(input) {
            let number_node = Node::leaf(NodeKind::Number, number);
            if let Some(rest) = rest.strip_prefix('%') {
                return Ok((rest, Node::interior(NodeKind::Percentage, vec![number_node])));
            }
            if let Ok((rest, unit)) = unit(rest) {
                let unit_node = Node::leaf(NodeKind::Ident, unit);
                return Ok((
                    rest,
                    Node::interior(NodeKind::Dimension, vec![number_node, unit_node]),
                ));
            }
            return Ok((rest, number_node));
        }

        if let Ok((rest, name)) = tokens::ident(input) {
            if rest.starts_with('(') {
                return self.function(name, rest);
            }
            return Ok((rest, Node::leaf(NodeKind::Ident, name)));
        }

        let kind = if OPERATORS.contains(&c) {
            NodeKind::Operator
        } else {
            NodeKind::Raw
        };
        Ok((after, Node::leaf(kind, c.to_string())))
    }

    /// `name(...)`; `input` starts at the opening parenthesis.
    fn function(&self, name: &'a str, input: &'a str) -> Parsed<'a, Node> {
        let after_paren = &input[1..];
        let unquoted_url = name.eq_ignore_ascii_case("url")
            && !after_paren.trim_start().starts_with(['"', '\'']);

        let (rest, arguments) = if unquoted_url {
            let end = after_paren.find(')').ok_or(ParseError::Unbalanced {
                delimiter: '(',
                position: self.position(input),
            })?;
            let raw = &after_paren[..end];
            let arguments = if raw.is_empty() {
                Vec::new()
            } else {
                vec![Node::leaf(NodeKind::Raw, raw)]
            };
            (&after_paren[end..], arguments)
        } else {
            self.value_tokens(after_paren, Stop::Paren)?
        };
        let rest = self.closing(rest, ')', '(', input)?;

        let children = vec![
            Node::leaf(NodeKind::Ident, name),
            Node::interior(NodeKind::Arguments, arguments),
        ];
        Ok((rest, Node::interior(NodeKind::Function, children)))
    }

    fn closing(&self, rest: &'a str, close: char, open: char, opened_at: &'a str) -> Result<&'a str, ParseError> {
        rest.strip_prefix(close).ok_or(ParseError::Unbalanced {
            delimiter: open,
            position: self.position(opened_at),
        })
    }
}

fn unit(input: &str) -> nom::IResult<&str, &str> {
    take_while1(|c: char| c.is_alphabetic())(input)
}

fn wrapped_ident(kind: NodeKind, name: &str) -> Node {
    Node::interior(kind, vec![Node::leaf(NodeKind::Ident, name)])
}
