//! End-to-end extraction from the fixture stylesheets, from both file paths
//! and in-memory content.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use custom_property_extract::{
    CustomPropertyRecord, ExtractError, ExtractOptions, ExtractResult, Mode, PropertyValue,
    Source, Syntax, extract, extract_with_json,
};
use pretty_assertions::assert_eq;

fn fixture(syntax: Syntax) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("example.{syntax}"))
}

/// Expected simple-mode output as key, values pairs in document order.
fn expected(syntax: Syntax, prefix: bool) -> Vec<(String, Vec<String>)> {
    let variable = match syntax {
        Syntax::Css => "blue",
        Syntax::Scss | Syntax::Sass => "$color-secondary",
    };
    let template: [(&str, Vec<&str>); 11] = [
        ("--color-primary", vec!["#ff017d", "#cf689a", variable, "blue"]),
        ("--color-secondary", vec!["#000", variable]),
        ("--color-background", vec!["white", "var(--color-background)"]),
        ("--color-foreground", vec!["var(--color-secondary)"]),
        ("--radius-round", vec!["50% 50%"]),
        ("--spacing-s", vec!["5rem"]),
        (
            "--shadow-xs",
            vec!["1px 2px 3px 4px rgba(0,0,0,0.25), inset 4px 3px 2px 1px #fff"],
        ),
        ("--border-light", vec!["1px solid rgba(0,0,0,0.15)"]),
        ("--amount-suffix-content", vec!["'€'", "'$'"]),
        ("--margin-default", vec!["0.5rem !important"]),
        ("--width-header", vec!["calc(100vh - (3rem / 2))"]),
    ];
    template
        .into_iter()
        .map(|(key, values)| {
            let key = if prefix { key } else { &key[2..] };
            (
                key.to_string(),
                values.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

fn actual(result: &ExtractResult) -> Vec<(String, Vec<String>)> {
    result
        .iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.value().to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_extract_from_file() {
    for syntax in Syntax::ALL {
        let path = fixture(syntax);
        let options = ExtractOptions {
            syntax,
            ..ExtractOptions::default()
        };
        let result = extract(path.to_str().unwrap(), &options).unwrap();
        assert_eq!(actual(&result), expected(syntax, true), "{syntax}");
    }
}

#[test]
fn test_extract_from_content() {
    for syntax in Syntax::ALL {
        let content = fs::read_to_string(fixture(syntax)).unwrap();
        let result = extract(&content, &ExtractOptions::content(syntax)).unwrap();
        assert_eq!(actual(&result), expected(syntax, true), "{syntax}");
    }
}

#[test]
fn test_extract_unprefixed() {
    for syntax in Syntax::ALL {
        let content = fs::read_to_string(fixture(syntax)).unwrap();
        let options = ExtractOptions::content(syntax).with_prefix(false);
        let result = extract(&content, &options).unwrap();
        assert_eq!(actual(&result), expected(syntax, false), "{syntax}");
    }
}

#[test]
fn test_full_mode_context() {
    for syntax in Syntax::ALL {
        let content = fs::read_to_string(fixture(syntax)).unwrap();
        let options = ExtractOptions::content(syntax).with_mode(Mode::Full);
        let result = extract(&content, &options).unwrap();

        let variable = if syntax == Syntax::Css { "blue" } else { "$color-secondary" };
        assert_eq!(
            result.get("--color-primary").unwrap(),
            &[
                PropertyValue::Detailed(
                    CustomPropertyRecord::new("#ff017d")
                        .with_selector(":root")
                        .with_name("Primary")
                ),
                PropertyValue::Detailed(CustomPropertyRecord::new("#cf689a").with_selector(".theme")),
                PropertyValue::Detailed(
                    CustomPropertyRecord::new(variable).with_selector(".theme--alternate")
                ),
                PropertyValue::Detailed(
                    CustomPropertyRecord::new("blue")
                        .with_selector(":root")
                        .with_media("(prefers-color-scheme: dark)")
                ),
            ],
            "{syntax}"
        );
        assert_eq!(
            result.get("--amount-suffix-content").unwrap()[1],
            PropertyValue::Detailed(CustomPropertyRecord::new("'$'").with_selector(".theme .price")),
            "{syntax}"
        );
    }
}

#[test]
fn test_extract_from_temporary_file() {
    let mut file = tempfile::Builder::new().suffix(".scss").tempfile().unwrap();
    writeln!(file, ".a {{ &:hover {{ --x: 1px; }} }}").unwrap();

    let options = ExtractOptions {
        syntax: Syntax::Scss,
        mode: Mode::Full,
        prefix: false,
        source: Source::File,
    };
    let result = extract(file.path().to_str().unwrap(), &options).unwrap();
    assert_eq!(
        result.get("x").unwrap(),
        &[PropertyValue::Detailed(CustomPropertyRecord::new("1px").with_selector(".a:hover"))]
    );
}

#[test]
fn test_json_options() {
    let result = extract_with_json(
        ":root { --x: 1; }",
        r#"{ "source": "content", "prefix": false }"#,
    )
    .unwrap();
    assert_eq!(result.values("x"), vec!["1"]);

    let err = extract_with_json(":root {}", r#"{ "syntax": "less" }"#).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidOptions(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.css");
    let err = extract(path.to_str().unwrap(), &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::Io { .. }));
}

#[test]
fn test_parse_error_is_reported() {
    let err = extract(":root { --x: 1;", &ExtractOptions::content(Syntax::Css)).unwrap_err();
    assert!(matches!(err, ExtractError::Parse(_)));
    assert!(err.to_string().contains("1:7"), "{err}");
}

#[test]
fn test_options_from_names() {
    let options = ExtractOptions::from_names("scss", "simple", false, "content").unwrap();
    let result = extract(".a { .b { --x: 1px; } }", &options).unwrap();
    assert_eq!(result.values("x"), vec!["1px"]);

    let err = ExtractOptions::from_names("css", "simple", true, "url").unwrap_err();
    assert!(matches!(err, ExtractError::UnknownSource(_)));
    assert!(err.to_string().contains("`url`"), "{err}");
}

#[test]
fn test_brace_block_value() {
    let result = extract(":root { --x: {a:b}; --y: 1; }", &ExtractOptions::content(Syntax::Css)).unwrap();
    assert_eq!(result.values("--x"), vec!["{a:b}"]);
    assert_eq!(result.values("--y"), vec!["1"]);
}
