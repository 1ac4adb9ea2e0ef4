//! Selector scopes of custom properties in nested rulesets.

use cssnode::{Syntax, parse_stylesheet};
use pretty_assertions::assert_eq;
use propextract::{ExtractConfig, ExtractResult, Mode, extract_tree};

fn full(source: &str) -> ExtractResult {
    let sheet = parse_stylesheet(source, Syntax::Scss).unwrap();
    extract_tree(&sheet, &ExtractConfig::default().with_mode(Mode::Full))
}

/// The selector recorded for each occurrence of `key`.
fn selectors(result: &ExtractResult, key: &str) -> Vec<Option<String>> {
    result
        .get(key)
        .unwrap_or_default()
        .iter()
        .map(|value| value.record().and_then(|record| record.selector.clone()))
        .collect()
}

fn some(selector: &str) -> Option<String> {
    Some(selector.to_string())
}

#[test]
fn test_parent_reference_cartesian_product() {
    let result = full(".a, .b { &.c, &.d { --x: 1; } }");
    assert_eq!(selectors(&result, "--x"), vec![some(".a.c, .a.d, .b.c, .b.d")]);
}

#[test]
fn test_descendant_nesting() {
    let result = full(".card { .title { --x: 1; } }");
    assert_eq!(selectors(&result, "--x"), vec![some(".card .title")]);
}

#[test]
fn test_pseudo_class_touches_parent() {
    let result = full("a { :hover { --x: 1; } }");
    assert_eq!(selectors(&result, "--x"), vec![some("a:hover")]);
}

#[test]
fn test_siblings_share_parent_scope() {
    let result = full(
        "\
.a {
  .b { --x: 1; }
  .c { --y: 2; }
  &.d { --z: 3; }
}",
    );
    assert_eq!(selectors(&result, "--x"), vec![some(".a .b")]);
    assert_eq!(selectors(&result, "--y"), vec![some(".a .c")]);
    assert_eq!(selectors(&result, "--z"), vec![some(".a.d")]);
}

#[test]
fn test_three_levels() {
    let result = full(".a { .b { .c { --x: 1; } } }");
    assert_eq!(selectors(&result, "--x"), vec![some(".a .b .c")]);
}

#[test]
fn test_returning_to_root_resets_scope() {
    let result = full(
        "\
.a {
  .b { --x: 1; }
}
.d { --x: 2; }
",
    );
    assert_eq!(selectors(&result, "--x"), vec![some(".a .b"), some(".d")]);
}

#[test]
fn test_root_level_siblings() {
    let result = full(":root { --x: 1; }\n.dark { --x: 2; }\n");
    assert_eq!(selectors(&result, "--x"), vec![some(":root"), some(".dark")]);
}

#[test]
fn test_declaration_before_nested_ruleset_uses_parent_scope() {
    let result = full(".a { --x: 1; .b { --y: 2; } }");
    assert_eq!(selectors(&result, "--x"), vec![some(".a")]);
    assert_eq!(selectors(&result, "--y"), vec![some(".a .b")]);
}

#[test]
fn test_top_level_declaration_has_no_selector() {
    let result = full("--loose: 1px;");
    assert_eq!(
        result.get("--loose").unwrap(),
        &[propextract::PropertyValue::Plain("1px".to_string())]
    );
}
