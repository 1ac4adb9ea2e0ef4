//! Lexical building blocks shared by the structural parsers.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while, take_while1},
    character::complete::{char, digit1, multispace1, one_of, satisfy},
    combinator::{opt, recognize},
    sequence::{delimited, pair, preceded, tuple},
};

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || !c.is_ascii()
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// A CSS identifier: an optional leading dash, a letter or underscore, then name characters.
pub fn ident(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        satisfy(is_name_start),
        take_while(is_name_char),
    )))(input)
}

/// A run of name characters with no restriction on the first one (`2n`, `-suffix`, `50`).
pub fn name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char)(input)
}

/// A signed decimal number (`1`, `-0.5`, `.25`).
pub fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
    ))(input)
}

pub fn whitespace(input: &str) -> IResult<&str, &str> {
    multispace1(input)
}

/// A `/* ... */` comment; yields the text between the markers.
pub fn block_comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// A `// ...` comment up to the end of the line; yields the text after the marker.
pub fn line_comment(input: &str) -> IResult<&str, &str> {
    preceded(tag("//"), alt((is_not("\r\n"), tag(""))))(input)
}

/// A single- or double-quoted string, quotes included. Backslash escapes are honored.
pub fn quoted(input: &str) -> IResult<&str, &str> {
    let quote = match input.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )));
        }
    };

    let mut escaped = false;
    for (i, c) in input.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            let end = i + c.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }

    Err(nom::Err::Failure(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Eof,
    )))
}

/// Byte length of a balanced `open ... close` group at the start of `input`,
/// skipping over quoted strings. `None` when the group never closes.
pub(crate) fn balanced_len(input: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '"' || c == '\'' {
            let (rest, _) = quoted(&input[i..]).ok()?;
            let resume = input.len() - rest.len();
            while chars.clone().next().is_some_and(|(j, _)| j < resume) {
                chars.next();
            }
            continue;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i + c.len_utf8());
            }
        }
    }
    None
}
