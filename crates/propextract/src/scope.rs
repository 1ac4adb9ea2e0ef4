//! Selector scope composition for nested rulesets.

use cssnode::{Node, NodeKind};

use crate::render::render_selector;

/// The selector alternatives a ruleset declares itself, in source order.
///
/// Consecutive selector nodes are joined with a space; a delimiter (`,`)
/// starts the next alternative. Each alternative is trimmed and empty ones
/// are dropped.
pub fn own_selectors(ruleset_children: &[Node]) -> Vec<String> {
    let mut alternatives = Vec::new();
    let mut current = String::new();

    for child in ruleset_children {
        match child.kind {
            NodeKind::Selector => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&render_selector(std::slice::from_ref(child), None));
            }
            NodeKind::Delimiter => finish(&mut alternatives, &mut current),
            _ => {}
        }
    }
    finish(&mut alternatives, &mut current);
    alternatives
}

fn finish(alternatives: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        alternatives.push(trimmed.to_string());
    }
    current.clear();
}

/// Combines inherited scopes with a ruleset's own selectors.
///
/// With no inherited scopes the ruleset's own alternatives are returned as
/// is. Otherwise every inherited scope is paired with every alternative,
/// inherited scopes varying slowest.
pub fn compose(inherited: &[String], ruleset_children: &[Node]) -> Vec<String> {
    let own = own_selectors(ruleset_children);
    if inherited.is_empty() {
        return own;
    }
    inherited
        .iter()
        .flat_map(|scope| own.iter().map(move |alternative| nest(scope, alternative)))
        .collect()
}

/// Joins a parent scope and a nested selector with a descendant space, then
/// folds `&` and pseudo selectors onto the parent.
pub fn nest(scope: &str, selector: &str) -> String {
    format!("{scope} {selector}")
        .replace(" &", "")
        .replace(" :", ":")
}
