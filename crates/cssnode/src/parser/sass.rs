//! Indented (`.sass`) syntax support.
//!
//! The indented syntax is rewritten into brace/semicolon form and then parsed
//! like SCSS. A line opens a block when the next non-blank line is indented
//! deeper; every other statement line gets a terminating `;`. Block comments may
//! continue on deeper-indented lines without a closing `*/`, and `//` comments
//! may do the same.
//!
//! The output has exactly one line per input line so positions stay meaningful.

pub(super) fn to_braces(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut out = String::with_capacity(source.len() + lines.len() * 2);
    let mut open: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let text = line.trim();
        if text.is_empty() {
            out.push('\n');
            i += 1;
            continue;
        }

        let indent = indentation(line);
        while open.last().is_some_and(|&top| indent <= top) {
            open.pop();
            out.push_str("} ");
        }
        out.push_str(&line[..line.len() - line.trim_start().len()]);

        if text.starts_with("/*") || text.starts_with("//") {
            i = push_comment(&lines, i, indent, &mut out);
            continue;
        }

        let next_indent = lines[i + 1..]
            .iter()
            .find(|l| !l.trim().is_empty())
            .map(|l| indentation(l));

        if next_indent.is_some_and(|next| next > indent) {
            out.push_str(text);
            out.push_str(" {");
            open.push(indent);
        } else if text.ends_with(',') {
            // Selector list continued on the next line.
            out.push_str(text);
        } else {
            out.push_str(text.trim_end_matches(';'));
            out.push(';');
        }
        out.push('\n');
        i += 1;
    }

    if !open.is_empty() {
        if out.ends_with('\n') {
            out.pop();
        }
        for _ in open {
            out.push_str(" }");
        }
        out.push('\n');
    }
    out
}

/// Writes a comment starting at line `start` plus its deeper-indented
/// continuation lines; returns the index of the first line after it.
fn push_comment(lines: &[&str], start: usize, indent: usize, out: &mut String) -> usize {
    let first = lines[start].trim();
    let line_style = first.starts_with("//");
    out.push_str(first);

    let mut end = start + 1;
    while end < lines.len() {
        let line = lines[end];
        if !line.trim().is_empty() && indentation(line) <= indent {
            break;
        }
        out.push('\n');
        if line_style && !line.trim().is_empty() {
            out.push_str("//");
        }
        out.push_str(line);
        end += 1;
    }

    // Trailing blank lines belong to the surrounding code, not the comment.
    while end > start + 1 && lines[end - 1].trim().is_empty() {
        end -= 1;
        let trimmed = out.trim_end_matches(|c: char| c == ' ' || c == '\t').len();
        out.truncate(trimmed);
        if out.ends_with('\n') {
            out.pop();
        }
    }

    if !line_style && !out.trim_end().ends_with("*/") {
        out.push_str(" */");
    }
    out.push('\n');
    end
}

fn indentation(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_get_braces() {
        let sass = ":root\n  --a: 1\n  .b\n    --c: 2\n.d\n  --e: 3\n";
        let scss = to_braces(sass);
        assert_eq!(
            scss,
            ":root {\n  --a: 1;\n  .b {\n    --c: 2;\n} } .d {\n  --e: 3; }\n"
        );
        assert_eq!(scss.lines().count(), sass.lines().count());
    }

    #[test]
    fn comments_are_kept_and_closed() {
        let sass = "/* @case Primary\n:root\n  --a: 1\n";
        let scss = to_braces(sass);
        assert_eq!(scss, "/* @case Primary */\n:root {\n  --a: 1; }\n");
    }

    #[test]
    fn indented_comment_continuation() {
        let sass = "// first\n  second\n:root\n  --a: 1";
        let scss = to_braces(sass);
        assert_eq!(scss, "// first\n//  second\n:root {\n  --a: 1; }\n");
    }
}
