//! # Rich Text Values
//!
//! Text in block props arrives in three shapes:
//!
//! - a plain string (legacy, language independent)
//! - a legacy object carrying a single `text` field
//! - an object with per-language fields (`ru`, `en`, `uz`) plus optional `text`
//!
//! Resolution never fails. Missing or malformed input resolves to an empty
//! string and no style, because half-authored content is the common case
//! while a page is being built.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typography attached to a rich text value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub color: Option<String>,
}

/// The language-keyed strings shared by text and button values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uz: Option<String>,
}

impl LocalizedText {
    /// Same string in every language slot
    pub fn uniform(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: None,
            ru: Some(value.clone()),
            en: Some(value.clone()),
            uz: Some(value),
        }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Ru => self.ru.as_deref(),
            Language::En => self.en.as_deref(),
            Language::Uz => self.uz.as_deref(),
        }
    }

    pub fn set(&mut self, language: Language, value: impl Into<String>) {
        let slot = match language {
            Language::Ru => &mut self.ru,
            Language::En => &mut self.en,
            Language::Uz => &mut self.uz,
        };
        *slot = Some(value.into());
    }

    /// Whether any per-language field is present
    pub fn has_language_keys(&self) -> bool {
        Language::ALL.iter().any(|lang| self.get(*lang).is_some())
    }

    /// Per-language field, then legacy `text`, then empty
    pub fn resolve(&self, language: Language) -> &str {
        self.get(language)
            .or(self.text.as_deref())
            .unwrap_or("")
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let field = |key: &str| map.get(key).and_then(crate::lenient::scalar_to_string);
        Self {
            text: field("text"),
            ru: field("ru"),
            en: field("en"),
            uz: field("uz"),
        }
    }
}

/// Multi-language text with optional typography
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl RichText {
    pub fn uniform(value: impl Into<String>) -> Self {
        Self {
            content: LocalizedText::uniform(value),
            style: None,
        }
    }

    /// Legacy single-field value
    pub fn legacy(value: impl Into<String>) -> Self {
        Self {
            content: LocalizedText {
                text: Some(value.into()),
                ..Default::default()
            },
            style: None,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            content: LocalizedText::from_object(map),
            style: map
                .get("style")
                .and_then(|style| serde_json::from_value(style.clone()).ok()),
        }
    }
}

/// Any accepted shape of a text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Rich(RichText),
}

impl TextValue {
    /// Read a text field out of a raw prop bag value.
    ///
    /// Returns `None` for shapes that cannot hold text (numbers, arrays, null).
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(TextValue::Plain(s.clone())),
            Value::Object(map) => Some(TextValue::Rich(RichText::from_object(map))),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    pub fn resolve(&self, language: Language) -> &str {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Rich(rich) => rich.content.resolve(language),
        }
    }

    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            TextValue::Plain(_) => None,
            TextValue::Rich(rich) => rich.style.as_ref(),
        }
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::Plain(value.to_string())
    }
}

impl From<RichText> for TextValue {
    fn from(value: RichText) -> Self {
        TextValue::Rich(value)
    }
}

/// Display string for `value` in `language`
pub fn resolve_text(value: Option<&TextValue>, language: Language) -> String {
    value
        .map(|v| v.resolve(language).to_string())
        .unwrap_or_default()
}

/// Style of `value`; plain strings carry none
pub fn resolve_style(value: Option<&TextValue>) -> Option<&TextStyle> {
    value.and_then(TextValue::style)
}

/// Resolve straight from a raw prop bag entry
pub fn resolve_json_text(value: Option<&Value>, language: Language) -> String {
    let parsed = value.and_then(TextValue::from_json);
    resolve_text(parsed.as_ref(), language)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
}

/// Multi-language button label with variant, size and link target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonValue {
    #[serde(flatten)]
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ButtonValue {
    /// Lenient read of a button field. A plain string becomes the legacy label.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self {
                content: LocalizedText {
                    text: Some(s.clone()),
                    ..Default::default()
                },
                ..Default::default()
            }),
            Value::Object(map) => Some(Self {
                content: LocalizedText::from_object(map),
                style: map
                    .get("style")
                    .and_then(|style| serde_json::from_value(style.clone()).ok()),
                href: map.get("href").and_then(crate::lenient::scalar_to_string),
            }),
            _ => None,
        }
    }

    pub fn label(&self, language: Language) -> &str {
        self.content.resolve(language)
    }

    pub fn variant(&self) -> ButtonVariant {
        self.style.and_then(|s| s.variant).unwrap_or_default()
    }

    pub fn size(&self) -> ButtonSize {
        self.style.and_then(|s| s.size).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_value_resolves_empty() {
        for lang in Language::ALL {
            assert_eq!(resolve_text(None, lang), "");
        }
        assert!(resolve_style(None).is_none());
    }

    #[test]
    fn test_plain_string_is_language_independent() {
        let value = TextValue::from("Sale");
        for lang in Language::ALL {
            assert_eq!(resolve_text(Some(&value), lang), "Sale");
        }
        assert!(resolve_style(Some(&value)).is_none());
    }

    #[test]
    fn test_language_then_legacy_fallback() {
        let value = TextValue::from_json(&json!({ "text": "Hello", "ru": "Привет" })).unwrap();
        assert_eq!(resolve_text(Some(&value), Language::Ru), "Привет");
        assert_eq!(resolve_text(Some(&value), Language::En), "Hello");
        assert_eq!(resolve_text(Some(&value), Language::Uz), "Hello");
    }

    #[test]
    fn test_object_without_any_text_is_empty() {
        let value = TextValue::from_json(&json!({ "style": { "color": "red" } })).unwrap();
        assert_eq!(resolve_text(Some(&value), Language::En), "");
        assert_eq!(resolve_style(Some(&value)).unwrap().color.as_deref(), Some("red"));
    }

    #[test]
    fn test_malformed_shapes_degrade() {
        assert!(TextValue::from_json(&json!(42)).is_none());
        assert!(TextValue::from_json(&json!(null)).is_none());
        assert_eq!(resolve_json_text(Some(&json!([1, 2])), Language::En), "");

        // Non-string language entries are coerced or dropped, never fatal
        let value = TextValue::from_json(&json!({ "en": 12, "ru": ["x"], "style": "bold" })).unwrap();
        assert_eq!(value.resolve(Language::En), "12");
        assert_eq!(value.resolve(Language::Ru), "");
        assert!(value.style().is_none());
    }

    #[test]
    fn test_numeric_style_fields_are_accepted() {
        let value = TextValue::from_json(&json!({
            "en": "Title",
            "style": { "fontSize": 32, "fontWeight": "700" }
        }))
        .unwrap();
        let style = value.style().unwrap();
        assert_eq!(style.font_size.as_deref(), Some("32"));
        assert_eq!(style.font_weight.as_deref(), Some("700"));
    }

    #[test]
    fn test_rich_text_serializes_flat() {
        let value = RichText::uniform("Hi").with_style(TextStyle {
            color: Some("#fff".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            json!({ "ru": "Hi", "en": "Hi", "uz": "Hi", "style": { "color": "#fff" } })
        );
    }

    #[test]
    fn test_button_value() {
        let button = ButtonValue::from_json(&json!({
            "en": "Shop now",
            "text": "Buy",
            "href": "/catalog",
            "style": { "variant": "outline", "size": "lg" }
        }))
        .unwrap();
        assert_eq!(button.label(Language::En), "Shop now");
        assert_eq!(button.label(Language::Uz), "Buy");
        assert_eq!(button.href.as_deref(), Some("/catalog"));
        assert_eq!(button.variant(), ButtonVariant::Outline);
        assert_eq!(button.size(), ButtonSize::Lg);

        let legacy = ButtonValue::from_json(&json!("Go")).unwrap();
        assert_eq!(legacy.label(Language::Ru), "Go");
        assert_eq!(legacy.variant(), ButtonVariant::Default);
    }

    #[test]
    fn test_unknown_button_variant_is_ignored() {
        let button = ButtonValue::from_json(&json!({ "en": "Go", "style": { "variant": "neon" } })).unwrap();
        assert!(button.style.is_none());
        assert_eq!(button.variant(), ButtonVariant::Default);
    }
}
