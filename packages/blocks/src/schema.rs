use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_document::PropBag;

/// Editor control used for a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputKind {
    /// Single-language string
    Text,
    /// Multi-language text with typography
    RichText,
    /// Multi-language label with variant and link
    Button,
    Image,
    Url,
    Number,
    Toggle,
    Color,
    Select { options: Vec<String> },
    /// Array of structured items (links, testimonials, columns)
    List,
}

impl InputKind {
    /// Whether `value` has a shape this control can edit.
    ///
    /// `null` is accepted everywhere and means "unset".
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (InputKind::RichText | InputKind::Button, Value::String(_) | Value::Object(_)) => true,
            (InputKind::Text | InputKind::Image | InputKind::Url | InputKind::Color, Value::String(_)) => true,
            (InputKind::Number, Value::Number(_)) => true,
            (InputKind::Toggle, Value::Bool(_)) => true,
            (InputKind::Select { options }, Value::String(s)) => options.iter().any(|o| o == s),
            (InputKind::List, Value::Array(_)) => true,
            _ => false,
        }
    }

    pub fn select(options: &[&str]) -> Self {
        InputKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// One editable field of a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub input: InputKind,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, input: InputKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            input,
        }
    }
}

/// Registry entry describing a block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSchema {
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
    pub default_props: PropBag,
}

impl BlockSchema {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
            default_props: PropBag::new(),
        }
    }

    pub fn field(mut self, key: &str, label: &str, input: InputKind) -> Self {
        self.fields.push(FieldDescriptor::new(key, label, input));
        self
    }

    /// Default props from a JSON object literal; non-objects yield no defaults
    pub fn defaults(mut self, props: Value) -> Self {
        self.default_props = match props {
            Value::Object(map) => map,
            _ => PropBag::new(),
        };
        self
    }

    pub fn find_field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Defaults overlaid with `overrides` (shallow, override wins)
    pub fn merged_props(&self, overrides: &PropBag) -> PropBag {
        let mut props = self.default_props.clone();
        for (key, value) in overrides {
            props.insert(key.clone(), value.clone());
        }
        props
    }
}
