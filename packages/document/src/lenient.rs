//! Serde helpers for fields authored by hand in the builder.
//!
//! These accept the loose shapes real documents contain (numbers where
//! strings were expected, bare strings where objects were expected) and map
//! anything unusable to `None` instead of failing the whole document.

use crate::model::{ColorMode, PropBag};
use crate::rich_text::{ButtonValue, TextValue};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// String or number, anything else becomes `None`
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Same as [`string`] but for required ids, falling back to an empty string
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

/// Booleans, plus the `"true"`/`"false"` strings some editors write
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Unknown modes become `None` so the theme falls back to light
pub fn color_mode<'de, D>(deserializer: D) -> Result<Option<ColorMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// Anything but an object becomes an empty bag
pub fn props<'de, D>(deserializer: D) -> Result<PropBag, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map,
        _ => PropBag::new(),
    })
}

/// Optional bag; non-objects become `None`
pub fn bag<'de, D>(deserializer: D) -> Result<Option<PropBag>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    })
}

/// String-valued map; entries with other value types are dropped
pub fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.clone(), v)))
        .collect())
}

/// Nested struct that falls back to `None` when its shape is wrong
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Like [`object`] but falls back to the type's default
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(object(deserializer)?.unwrap_or_default())
}

/// Optional list that skips entries which fail to deserialize
pub fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<TextValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(TextValue::from_json))
}

pub fn button<'de, D>(deserializer: D) -> Result<Option<ButtonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(ButtonValue::from_json))
}

/// Skip list entries that fail to deserialize instead of rejecting the list
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "flag")]
        enabled: Option<bool>,
        #[serde(default, deserialize_with = "color_mode")]
        mode: Option<ColorMode>,
        #[serde(default, deserialize_with = "props")]
        props: PropBag,
        #[serde(default, deserialize_with = "string_map")]
        colors: BTreeMap<String, String>,
    }

    fn read(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flags_accept_bools_and_bool_strings() {
        assert_eq!(read(json!({ "enabled": true })).enabled, Some(true));
        assert_eq!(read(json!({ "enabled": "false" })).enabled, Some(false));
        assert_eq!(read(json!({ "enabled": "yes" })).enabled, None);
        assert_eq!(read(json!({ "enabled": 1 })).enabled, None);
    }

    #[test]
    fn test_unknown_color_mode_is_none() {
        assert_eq!(read(json!({ "mode": "Dark" })).mode, Some(ColorMode::Dark));
        assert_eq!(read(json!({ "mode": "auto" })).mode, None);
        assert_eq!(read(json!({ "mode": 3 })).mode, None);
    }

    #[test]
    fn test_non_object_props_become_empty() {
        assert!(read(json!({ "props": null })).props.is_empty());
        assert!(read(json!({ "props": [1, 2] })).props.is_empty());
        assert_eq!(read(json!({ "props": { "a": 1 } })).props.len(), 1);
    }

    #[test]
    fn test_string_map_drops_bad_entries() {
        let colors = read(json!({ "colors": { "primary": "#111", "ring": {}, "chart1": 5 } })).colors;
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("chart1").map(String::as_str), Some("5"));
    }
}
