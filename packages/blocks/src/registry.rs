//! # Block Schema Registry
//!
//! Lookup table from a block type tag to its schema and render function.
//! This is the only place block polymorphism happens: adding a block type
//! means registering one more entry, no core logic changes.
//!
//! Unknown tags never fail. `get_schema` returns `None` and rendering yields
//! [`VNode::Empty`], so one unsupported block never takes the page down.

use crate::builtin;
use crate::components::render_components;
use crate::context::RenderContext;
use crate::schema::BlockSchema;
use crate::vdom::VNode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use storefront_document::{BlockInstance, PropBag, SiteConfig};
use tracing::{debug, instrument, warn};

pub type RenderFn = Arc<dyn Fn(&BlockInstance, &RenderContext) -> VNode + Send + Sync>;

#[derive(Clone)]
pub struct RegistryEntry {
    pub schema: BlockSchema,
    render: RenderFn,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl BlockRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in block type registered
    pub fn with_builtin_blocks() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    /// Register or replace the entry for `tag`.
    ///
    /// Re-registering the same tag overwrites the previous entry, which keeps
    /// hot reload and test setups idempotent.
    pub fn register<F>(&mut self, tag: impl Into<String>, schema: BlockSchema, render: F)
    where
        F: Fn(&BlockInstance, &RenderContext) -> VNode + Send + Sync + 'static,
    {
        let tag = tag.into();
        let replaced = self
            .entries
            .insert(
                tag.clone(),
                RegistryEntry {
                    schema,
                    render: Arc::new(render),
                },
            )
            .is_some();
        debug!(block_type = %tag, replaced, "Registered block type");
    }

    pub fn get_schema(&self, tag: &str) -> Option<&BlockSchema> {
        self.entries.get(tag).map(|entry| &entry.schema)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schema defaults merged with `overrides`; `None` for unknown tags
    pub fn props_for_new_block(&self, tag: &str, overrides: &PropBag) -> Option<PropBag> {
        self.get_schema(tag).map(|schema| schema.merged_props(overrides))
    }

    /// Render one block. Unknown types render nothing.
    pub fn render_block(&self, block: &BlockInstance, ctx: &RenderContext) -> VNode {
        let Some(entry) = self.entries.get(&block.block_type) else {
            warn!(block_id = %block.id, block_type = %block.block_type, "No renderer registered, skipping block");
            return VNode::Empty;
        };

        let mut node = (entry.render)(block, ctx);
        if node.is_empty() {
            return node;
        }

        for child in render_components(block.children(), ctx) {
            node.push_child(child);
        }

        if ctx.is_builder() {
            node = node
                .with_attr("data-block-id", block.id.as_str())
                .with_attr("data-block-type", block.block_type.as_str());
        }

        node
    }

    /// Render a full page: navigation, body blocks in order, active footer.
    #[instrument(skip(self, site, ctx), fields(site_id = %site.id, blocks = site.blocks.len()))]
    pub fn render_page(&self, site: &SiteConfig, ctx: &RenderContext) -> VNode {
        let mut children = Vec::new();

        if let Some(nav) = site.navigation() {
            children.push(self.render_block(nav, ctx));
        }

        let main = VNode::element("main").with_children(
            site.body_blocks().map(|block| self.render_block(block, ctx)),
        );
        children.push(main);

        if let Some(footer) = site.active_footer() {
            children.push(self.render_block(footer, ctx));
        }

        VNode::fragment(children)
    }
}

/// Typed view of a block's prop bag.
///
/// Returns `None` (and logs) when the props do not fit `T`, so the caller can
/// render nothing for that block instead of failing the page.
pub fn typed_props<T: DeserializeOwned>(block: &BlockInstance) -> Option<T> {
    match serde_json::from_value(Value::Object(block.props.clone())) {
        Ok(props) => Some(props),
        Err(err) => {
            warn!(block_id = %block.id, block_type = %block.block_type, error = %err, "Block props do not match schema");
            None
        }
    }
}
