//! Collecting custom-property values into the result map.

use cssnode::{Node, NodeKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ExtractConfig, Mode};
use crate::render::render_value;
use crate::walker::{Occurrence, occurrences, property_name};

/// A value together with the context it was declared in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPropertyRecord {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl CustomPropertyRecord {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Whether the record carries anything besides its value.
    pub fn has_context(&self) -> bool {
        self.selector.is_some() || self.name.is_some() || self.media.is_some()
    }
}

/// One entry in a property's value list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Plain(String),
    Detailed(CustomPropertyRecord),
}

impl PropertyValue {
    pub fn value(&self) -> &str {
        match self {
            PropertyValue::Plain(value) => value,
            PropertyValue::Detailed(record) => &record.value,
        }
    }

    pub fn record(&self) -> Option<&CustomPropertyRecord> {
        match self {
            PropertyValue::Plain(_) => None,
            PropertyValue::Detailed(record) => Some(record),
        }
    }

    /// Collapses a record without context to its bare value.
    pub fn from_record(record: CustomPropertyRecord) -> Self {
        if record.has_context() {
            PropertyValue::Detailed(record)
        } else {
            PropertyValue::Plain(record.value)
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Plain(value.to_string())
    }
}

impl From<CustomPropertyRecord> for PropertyValue {
    fn from(record: CustomPropertyRecord) -> Self {
        PropertyValue::Detailed(record)
    }
}

/// Property key to the values it was declared with, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractResult {
    entries: IndexMap<String, Vec<PropertyValue>>,
}

impl ExtractResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `key`. Values that render to nothing are dropped.
    pub fn push(&mut self, key: impl Into<String>, value: PropertyValue) {
        if value.value().is_empty() {
            return;
        }
        self.entries.entry(key.into()).or_default().push(value);
    }

    pub fn get(&self, key: &str) -> Option<&[PropertyValue]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Rendered values under `key`, without context.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|values| values.iter().map(PropertyValue::value).collect())
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PropertyValue])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<PropertyValue>> {
        self.entries
    }
}

impl From<IndexMap<String, Vec<PropertyValue>>> for ExtractResult {
    fn from(entries: IndexMap<String, Vec<PropertyValue>>) -> Self {
        Self { entries }
    }
}

/// Runs the extraction `config.mode` selects.
pub fn extract_tree(root: &Node, config: &ExtractConfig) -> ExtractResult {
    match config.mode {
        Mode::Simple => simple_extract(root, config),
        Mode::Full => full_extract(root, config),
    }
}

/// Every custom-property value, without scope tracking.
pub fn simple_extract(root: &Node, config: &ExtractConfig) -> ExtractResult {
    let mut result = ExtractResult::new();
    root.traverse_by_kind(NodeKind::CustomProperty, |visit| {
        let Some(declaration) = visit.parent.filter(|p| p.is(NodeKind::Declaration)) else {
            return;
        };
        let name = property_name(visit.node);
        let value = declaration_value(declaration);
        log::trace!("{name}: {value:?}");
        result.push(format!("{}{name}", config.key_prefix()), PropertyValue::Plain(value));
    });
    result
}

/// Every custom-property value with the selector, `@case` name and media
/// condition it was declared under.
pub fn full_extract(root: &Node, config: &ExtractConfig) -> ExtractResult {
    let mut result = ExtractResult::new();
    for occurrence in occurrences(root) {
        let key = format!("{}{}", config.key_prefix(), occurrence.property_name());
        let record = record_for(&occurrence);
        log::trace!("{key}: {record:?}");
        result.push(key, PropertyValue::from_record(record));
    }
    result
}

fn record_for(occurrence: &Occurrence<'_>) -> CustomPropertyRecord {
    CustomPropertyRecord {
        value: occurrence.declaration.map(declaration_value).unwrap_or_default(),
        selector: occurrence.selector.clone(),
        name: occurrence.name.clone(),
        media: occurrence.media.clone(),
    }
}

/// The rendered value of a declaration; empty when it has none.
pub fn declaration_value(declaration: &Node) -> String {
    declaration
        .children()
        .iter()
        .rfind(|child| child.is(NodeKind::Value))
        .map(|value| render_value(value.children(), Some(NodeKind::Value)))
        .unwrap_or_default()
}
