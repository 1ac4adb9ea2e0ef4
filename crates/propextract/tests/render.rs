//! Rendering parsed values and selectors back to text.
//!
//! - Functions, parentheses and nested calls
//! - Sigils for colors, variables, custom properties and interpolation
//! - Selector prefixes, arguments and attribute brackets

use cssnode::{Node, NodeKind, Syntax, parse_stylesheet};
use insta::assert_snapshot;
use propextract::extract::declaration_value;
use propextract::render_value;
use propextract::scope::own_selectors;

/// Rendered value of the first declaration in `:root { --v: <value> }`.
fn value(value: &str, syntax: Syntax) -> String {
    let source = format!(":root {{ --v: {value} }}");
    let sheet = parse_stylesheet(&source, syntax).unwrap();
    let mut rendered = None;
    sheet.traverse_by_kind(NodeKind::Declaration, |visit| {
        rendered.get_or_insert_with(|| declaration_value(visit.node));
    });
    rendered.unwrap()
}

/// Selector alternatives of the first ruleset in `source`.
fn selectors(source: &str) -> Vec<String> {
    let sheet = parse_stylesheet(source, Syntax::Scss).unwrap();
    let ruleset = sheet.child(NodeKind::Ruleset).unwrap();
    own_selectors(ruleset.children())
}

// ============================================================================
// VALUES
// ============================================================================

#[test]
fn test_function_renders_unchanged() {
    assert_snapshot!(value("rgba(0,0,0,0.25)", Syntax::Css), @"rgba(0,0,0,0.25)");
}

#[test]
fn test_shadow_list() {
    assert_snapshot!(
        value("1px 2px 3px 4px rgba(0,0,0,0.25), inset 4px 3px 2px 1px #fff", Syntax::Css),
        @"1px 2px 3px 4px rgba(0,0,0,0.25), inset 4px 3px 2px 1px #fff"
    );
}

#[test]
fn test_nested_parentheses_in_calc() {
    assert_snapshot!(value("calc(100vh - (3rem / 2))", Syntax::Css), @"calc(100vh - (3rem / 2))");
}

#[test]
fn test_percentages() {
    assert_snapshot!(value("50% 50%", Syntax::Css), @"50% 50%");
}

#[test]
fn test_important_flag() {
    assert_snapshot!(value("0.5rem !important", Syntax::Css), @"0.5rem !important");
}

#[test]
fn test_strings_keep_quotes() {
    assert_eq!(value("'$'", Syntax::Css), "'$'");
    assert_eq!(value("\"€\"", Syntax::Css), "\"€\"");
}

#[test]
fn test_var_reference() {
    assert_snapshot!(value("var(--color-secondary)", Syntax::Css), @"var(--color-secondary)");
}

#[test]
fn test_sass_variable() {
    assert_snapshot!(value("$color-secondary", Syntax::Scss), @"$color-secondary");
}

#[test]
fn test_interpolation() {
    assert_snapshot!(value("#{$size}px", Syntax::Scss), @"#{$size}px");
}

#[test]
fn test_sigils_inside_parentheses() {
    assert_snapshot!(value("(#fff)", Syntax::Css), @"(#fff)");
    assert_snapshot!(value("($gap) (#fff 1px)", Syntax::Scss), @"($gap) (#fff 1px)");
}

#[test]
fn test_multiline_value_collapses_whitespace() {
    assert_eq!(value("1px\n    solid\n    red", Syntax::Css), "1px solid red");
}

#[test]
fn test_unknown_kinds_pass_through() {
    let nodes = [
        Node::leaf(NodeKind::Raw, "a"),
        Node::leaf(NodeKind::Operator, "/"),
        Node::leaf(NodeKind::Raw, "b"),
    ];
    assert_eq!(render_value(&nodes, None), "a/b");
}

// ============================================================================
// SELECTORS
// ============================================================================

#[test]
fn test_selector_list() {
    assert_eq!(selectors(".a, .b > li {}"), vec![".a", ".b > li"]);
}

#[test]
fn test_pseudo_selectors() {
    assert_eq!(
        selectors("li:nth-child(50)::before {}"),
        vec!["li:nth-child(50)::before"]
    );
    assert_eq!(selectors(":not(.a, .b) {}"), vec![":not(.a, .b)"]);
}

#[test]
fn test_attribute_selectors() {
    assert_eq!(selectors("input[type=\"text\"] {}"), vec!["input[type=\"text\"]"]);
    assert_eq!(selectors("[disabled] {}"), vec!["[disabled]"]);
    assert_eq!(selectors("a[href^='http' i] {}"), vec!["a[href^='http' i]"]);
}

#[test]
fn test_parent_references() {
    assert_eq!(selectors("&.active, &-title {}"), vec!["&.active", "&-title"]);
}

#[test]
fn test_multiline_selector_list() {
    assert_eq!(selectors("#main,\n.b\n.c {}"), vec!["#main", ".b .c"]);
}
