//! JSON boundary for site documents.
//!
//! Parsing is permissive: unknown block types, unknown prop keys and unknown
//! top-level keys are kept so a document written by a newer builder
//! round-trips unchanged. Prop bags keep their keys sorted, so
//! `serialize(parse(serialize(doc)))` is byte-identical to `serialize(doc)`.

use crate::error::DocumentResult;
use crate::model::SiteConfig;
use serde_json::Value;
use tracing::debug;

pub fn parse_site_config(source: &str) -> DocumentResult<SiteConfig> {
    let config: SiteConfig = serde_json::from_str(source)?;
    debug!(site_id = %config.id, blocks = config.blocks.len(), "Parsed site document");
    Ok(config)
}

pub fn parse_site_value(value: Value) -> DocumentResult<SiteConfig> {
    Ok(serde_json::from_value(value)?)
}

/// Pretty-printed JSON, the on-disk format
pub fn serialize_site_config(config: &SiteConfig) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn site_config_to_value(config: &SiteConfig) -> DocumentResult<Value> {
    Ok(serde_json::to_value(config)?)
}
