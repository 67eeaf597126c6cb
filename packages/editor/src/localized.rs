//! # Localized Field Updates
//!
//! Decides how an edit made in one language lands in a multi-language field.
//!
//! - No value, a plain string, or a legacy `{text}` value becomes a full
//!   per-language value with the new text in every slot.
//! - If every non-empty language slot holds the same string, the languages
//!   were never translated apart and all slots move together.
//! - Otherwise only the edited language changes.
//!
//! This is a content-preservation heuristic inferred from slot equality. It
//! lives behind [`next_localized_text`] so a different policy (an explicit
//! "linked" flag, say) only has to change this module.

use serde_json::{Map, Value};
use std::collections::HashSet;
use storefront_document::{Language, LocalizedText, RichText, TextValue};

/// Apply an edit to the language slots of `previous`
pub fn next_localized_text(previous: Option<&LocalizedText>, new_text: &str, language: Language) -> LocalizedText {
    let Some(previous) = previous.filter(|p| p.has_language_keys()) else {
        return LocalizedText::uniform(new_text);
    };

    let distinct: HashSet<&str> = Language::ALL
        .iter()
        .filter_map(|lang| previous.get(*lang))
        .filter(|value| !value.is_empty())
        .collect();

    let mut next = previous.clone();
    if distinct.len() <= 1 {
        for lang in Language::ALL {
            next.set(lang, new_text);
        }
    } else {
        next.set(language, new_text);
    }
    next
}

/// Typed form of the update; style on the previous value is kept
pub fn update_localized_field(previous: Option<&TextValue>, new_text: &str, language: Language) -> RichText {
    match previous {
        Some(TextValue::Rich(rich)) => RichText {
            content: next_localized_text(Some(&rich.content), new_text, language),
            style: rich.style.clone(),
        },
        Some(TextValue::Plain(_)) | None => RichText::uniform(new_text),
    }
}

/// Update a raw prop value.
///
/// Keys other than the language slots (`style`, `href`, ...) survive, so the
/// same update works for text and button fields.
pub fn update_localized_value(previous: Option<&Value>, new_text: &str, language: Language) -> Value {
    let mut map = match previous {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };

    let content = match previous.and_then(TextValue::from_json) {
        Some(TextValue::Rich(rich)) => Some(rich.content),
        _ => None,
    };
    let converted = !content.as_ref().is_some_and(LocalizedText::has_language_keys);
    let next = next_localized_text(content.as_ref(), new_text, language);

    if converted {
        map.remove("text");
    }
    for lang in Language::ALL {
        if let Some(value) = next.get(lang) {
            map.insert(lang.code().to_string(), Value::String(value.to_string()));
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_document::TextStyle;

    fn rich(ru: &str, en: &str, uz: &str) -> TextValue {
        TextValue::Rich(RichText {
            content: LocalizedText {
                ru: Some(ru.to_string()),
                en: Some(en.to_string()),
                uz: Some(uz.to_string()),
                ..Default::default()
            },
            style: None,
        })
    }

    #[test]
    fn test_synchronized_languages_move_together() {
        for lang in Language::ALL {
            let next = update_localized_field(Some(&rich("x", "x", "x")), "y", lang);
            assert_eq!(next, RichText::uniform("y"));
        }
    }

    #[test]
    fn test_diverged_languages_edit_in_isolation() {
        let next = update_localized_field(Some(&rich("a", "b", "c")), "d", Language::En);
        assert_eq!(next.content.ru.as_deref(), Some("a"));
        assert_eq!(next.content.en.as_deref(), Some("d"));
        assert_eq!(next.content.uz.as_deref(), Some("c"));
    }

    #[test]
    fn test_empty_slots_do_not_count_as_divergence() {
        let next = update_localized_field(Some(&rich("x", "", "x")), "y", Language::Uz);
        assert_eq!(next, RichText::uniform("y"));
    }

    #[test]
    fn test_plain_and_legacy_become_uniform() {
        assert_eq!(update_localized_field(None, "new", Language::Ru), RichText::uniform("new"));
        assert_eq!(
            update_localized_field(Some(&TextValue::from("old")), "new", Language::En),
            RichText::uniform("new")
        );

        let legacy = TextValue::Rich(RichText::legacy("old").with_style(TextStyle {
            color: Some("red".to_string()),
            ..Default::default()
        }));
        let next = update_localized_field(Some(&legacy), "new", Language::Uz);
        assert_eq!(next.content, LocalizedText::uniform("new"));
        assert_eq!(next.style.unwrap().color.as_deref(), Some("red"));
    }

    #[test]
    fn test_raw_value_keeps_button_keys() {
        let button = json!({ "ru": "Купить", "en": "Buy", "href": "/buy", "style": { "variant": "outline" } });
        let next = update_localized_value(Some(&button), "Shop", Language::En);
        assert_eq!(
            next,
            json!({ "ru": "Купить", "en": "Shop", "href": "/buy", "style": { "variant": "outline" } })
        );
    }

    #[test]
    fn test_raw_legacy_text_is_dropped() {
        let next = update_localized_value(Some(&json!({ "text": "Old" })), "New", Language::Ru);
        assert_eq!(next, json!({ "ru": "New", "en": "New", "uz": "New" }));

        let next = update_localized_value(Some(&json!(42)), "New", Language::Ru);
        assert_eq!(next, json!({ "ru": "New", "en": "New", "uz": "New" }));
    }
}
