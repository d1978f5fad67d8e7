//! Element
//!
//!     The element is the only leaf of the document model. It carries an open-ended `kind` tag
//!     (unknown kinds are preserved as-is so they round-trip losslessly), an opaque property bag
//!     and an optional rationale pulled out of the `highlight` property.
//!
//!     Kind-specific data lives in [`Payload`]. Keeping action triggers, input bindings, prose
//!     bodies and group items in one enum means an element can never carry both an action trigger
//!     and an input binding.
//!
//! Syntax
//!
//!     Plain:   kind: (key: value, ...)
//!     Action:  kind: [ (key: value, ...), prompt: <text> ]
//!     Input:   kind: [ (key: value, ...), <identifier> ]
//!
//!     Prose is not written with a tag at all: any line that matches neither form becomes an
//!     element of kind [`MARKDOWN_KIND`] whose payload is the raw text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind tag given to prose elements.
pub const MARKDOWN_KIND: &str = "markdown";

/// Property key whose value is moved into [`Element::rationale`].
pub const HIGHLIGHT_KEY: &str = "highlight";

/// Opaque key/value bag. Typed accessors belong to renderers, not to the compiler.
pub type Properties = BTreeMap<String, String>;

/// One entry of a grouped container element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupItem {
    pub trigger: String,
    pub content: String,
}

impl GroupItem {
    pub fn new(trigger: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            content: content.into(),
        }
    }
}

/// Kind-specific element data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// A tagged element with nothing beyond its properties.
    #[default]
    Plain,
    /// Free text describing the action submitted when the element is activated.
    Action(String),
    /// Identifier the element's captured value is published under.
    Input(String),
    /// Raw prose; the element is the text itself rather than a tagged widget.
    Markdown(String),
    /// Consecutive same-kind siblings merged into one container.
    Group(Vec<GroupItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default)]
    pub payload: Payload,
}

impl Element {
    /// Create a plain element. The kind is lower-cased.
    pub fn new(kind: impl AsRef<str>) -> Self {
        Self {
            kind: kind.as_ref().to_lowercase(),
            properties: Properties::new(),
            rationale: None,
            payload: Payload::Plain,
        }
    }

    /// Create a prose element from raw text.
    pub fn markdown(body: impl Into<String>) -> Self {
        Self {
            kind: MARKDOWN_KIND.to_string(),
            properties: Properties::new(),
            rationale: None,
            payload: Payload::Markdown(body.into()),
        }
    }

    /// Create a container element holding `items`.
    pub fn group(kind: impl AsRef<str>, items: Vec<GroupItem>) -> Self {
        Self {
            payload: Payload::Group(items),
            ..Self::new(kind)
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Move a `highlight` property, if any, into the rationale.
    ///
    /// After this call `properties` never contains a `highlight` key.
    pub fn extract_rationale(&mut self) {
        if let Some(highlight) = self.properties.remove(HIGHLIGHT_KEY) {
            self.rationale = Some(highlight);
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn action_trigger(&self) -> Option<&str> {
        match &self.payload {
            Payload::Action(trigger) => Some(trigger),
            _ => None,
        }
    }

    pub fn input_binding(&self) -> Option<&str> {
        match &self.payload {
            Payload::Input(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn markdown_body(&self) -> Option<&str> {
        match &self.payload {
            Payload::Markdown(body) => Some(body),
            _ => None,
        }
    }

    /// Items of a container element; empty for every other payload.
    pub fn group_items(&self) -> &[GroupItem] {
        match &self.payload {
            Payload::Group(items) => items,
            _ => &[],
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self.payload, Payload::Markdown(_))
    }

    pub fn is_group(&self) -> bool {
        !self.group_items().is_empty()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Markdown(body) => write!(f, "{}", body.lines().next().unwrap_or_default()),
            Payload::Group(items) => write!(f, "{} ({} items)", self.kind, items.len()),
            _ => {
                write!(f, "{}", self.kind)?;
                for (key, value) in &self.properties {
                    write!(f, " {}={}", key, value)?;
                }
                Ok(())
            }
        }
    }
}
