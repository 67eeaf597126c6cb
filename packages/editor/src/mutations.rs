//! # Site Mutations
//!
//! Editing operations over a [`SiteConfig`]. Each one reads the current
//! document and returns the next one; the input is never touched, so any
//! reader still holding the previous snapshot keeps a consistent tree.
//!
//! The free functions are lenient: an unknown id is a no-op, since editing UI
//! may race with a removal. [`Mutation`] is the serializable form of the same
//! operations with strict validation for callers that want to be told.

use crate::localized::update_localized_value;
use serde::{Deserialize, Serialize};
use storefront_blocks::BlockRegistry;
use storefront_document::{
    children_at_path_mut, component_at_path_mut, find_node, BlockInstance, ComponentInstance, IdGenerator, IdCollector,
    Language, PropBag, SiteConfig, Visitor,
};
use thiserror::Error;
use tracing::{debug, warn};

pub type MutationResult<T> = Result<T, MutationError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Id already in use: {0}")]
    DuplicateId(String),
}

/// Set one text field of a block using the localized update policy
pub fn update_block_text(
    config: &SiteConfig,
    block_id: &str,
    field: &str,
    new_value: &str,
    language: Language,
) -> SiteConfig {
    let mut next = config.clone();
    let Some(block) = next.blocks.iter_mut().find(|b| b.id == block_id) else {
        debug!(block_id, "Text update for missing block ignored");
        return next;
    };

    let value = update_localized_value(block.props.get(field), new_value, language);
    block.props.insert(field.to_string(), value);
    next
}

/// Shallow-merge `partial` into a block's props
pub fn update_block_props(config: &SiteConfig, block_id: &str, partial: &PropBag) -> SiteConfig {
    let mut next = config.clone();
    match next.blocks.iter_mut().find(|b| b.id == block_id) {
        Some(block) => merge_props(&mut block.props, partial),
        None => debug!(block_id, "Props update for missing block ignored"),
    }
    next
}

/// New block of `block_type` with schema defaults and `overrides`, given an
/// id unused anywhere in `config`. `None` for unregistered types.
pub fn new_block(
    config: &SiteConfig,
    registry: &BlockRegistry,
    block_type: &str,
    overrides: &PropBag,
) -> Option<BlockInstance> {
    let props = registry.props_for_new_block(block_type, overrides)?;
    let id = IdGenerator::for_site(block_type, config).next_id();
    Some(BlockInstance::new(id, block_type).with_props(props))
}

/// Append a new block. Unregistered types leave the document unchanged.
pub fn add_block(config: &SiteConfig, registry: &BlockRegistry, block_type: &str, overrides: &PropBag) -> SiteConfig {
    let mut next = config.clone();
    match new_block(config, registry, block_type, overrides) {
        Some(block) => next.blocks.push(block),
        None => warn!(block_type, "Cannot add block of unregistered type"),
    }
    next
}

/// Move the block at `from` so it ends up at `to`.
/// Out-of-range indices leave the order unchanged.
pub fn reorder_blocks(config: &SiteConfig, from: usize, to: usize) -> SiteConfig {
    let mut next = config.clone();
    let len = next.blocks.len();
    if from >= len || to >= len {
        warn!(from, to, len, "Reorder index out of range");
        return next;
    }
    if from != to {
        let block = next.blocks.remove(from);
        next.blocks.insert(to, block);
    }
    next
}

pub fn remove_block(config: &SiteConfig, block_id: &str) -> SiteConfig {
    let mut next = config.clone();
    next.blocks.retain(|b| b.id != block_id);
    next
}

/// Shallow-merge `partial` into a nested component's props
pub fn update_component_props(config: &SiteConfig, component_id: &str, partial: &PropBag) -> SiteConfig {
    let mut next = config.clone();
    let Some(path) = component_path(&next, component_id) else {
        debug!(component_id, "Props update for missing component ignored");
        return next;
    };
    if let Some(component) = component_at_path_mut(&mut next.blocks, &path) {
        merge_props(&mut component.props, partial);
    }
    next
}

/// Insert `component` under the block or component `parent_id`.
/// `index` past the end (or `None`) appends.
pub fn insert_component(
    config: &SiteConfig,
    parent_id: &str,
    index: Option<usize>,
    component: ComponentInstance,
) -> SiteConfig {
    let mut next = config.clone();
    let Some(path) = find_node(&next.blocks, parent_id).map(|found| found.path) else {
        debug!(parent_id, "Insert under missing parent ignored");
        return next;
    };
    if let Some(children) = children_at_path_mut(&mut next.blocks, &path) {
        let index = index.unwrap_or(children.len()).min(children.len());
        children.insert(index, component);
    }
    next
}

pub fn remove_component(config: &SiteConfig, component_id: &str) -> SiteConfig {
    let mut next = config.clone();
    let Some(path) = component_path(&next, component_id) else {
        return next;
    };
    let (index, parent) = match path.split_last() {
        Some((index, parent)) => (*index, parent.to_vec()),
        None => return next,
    };
    if let Some(children) = children_at_path_mut(&mut next.blocks, &parent) {
        if index < children.len() {
            children.remove(index);
        }
    }
    next
}

fn component_path(config: &SiteConfig, component_id: &str) -> Option<Vec<usize>> {
    let found = find_node(&config.blocks, component_id)?;
    found.node.as_component()?;
    Some(found.path)
}

fn merge_props(props: &mut PropBag, partial: &PropBag) {
    for (key, value) in partial {
        props.insert(key.clone(), value.clone());
    }
}

/// Serializable edit, as shipped by editing UI or the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    UpdateBlockText {
        block_id: String,
        field: String,
        value: String,
        language: Language,
    },

    UpdateBlockProps {
        block_id: String,
        props: PropBag,
    },

    AddBlock {
        block_type: String,
        #[serde(default)]
        props: PropBag,
    },

    ReorderBlocks {
        from: usize,
        to: usize,
    },

    RemoveBlock {
        block_id: String,
    },

    UpdateComponentProps {
        component_id: String,
        props: PropBag,
    },

    InsertComponent {
        parent_id: String,
        #[serde(default)]
        index: Option<usize>,
        component: ComponentInstance,
    },

    RemoveComponent {
        component_id: String,
    },
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateBlockText { .. } => "updateBlockText",
            Mutation::UpdateBlockProps { .. } => "updateBlockProps",
            Mutation::AddBlock { .. } => "addBlock",
            Mutation::ReorderBlocks { .. } => "reorderBlocks",
            Mutation::RemoveBlock { .. } => "removeBlock",
            Mutation::UpdateComponentProps { .. } => "updateComponentProps",
            Mutation::InsertComponent { .. } => "insertComponent",
            Mutation::RemoveComponent { .. } => "removeComponent",
        }
    }

    /// Check that the mutation targets something that exists
    pub fn validate(&self, config: &SiteConfig, registry: &BlockRegistry) -> MutationResult<()> {
        match self {
            Mutation::UpdateBlockText { block_id, .. }
            | Mutation::UpdateBlockProps { block_id, .. }
            | Mutation::RemoveBlock { block_id } => {
                if config.find_block(block_id).is_none() {
                    return Err(MutationError::BlockNotFound(block_id.clone()));
                }
            }

            Mutation::AddBlock { block_type, .. } => {
                if !registry.contains(block_type) {
                    return Err(MutationError::UnknownBlockType(block_type.clone()));
                }
            }

            Mutation::ReorderBlocks { from, to } => {
                let len = config.blocks.len();
                for index in [*from, *to] {
                    if index >= len {
                        return Err(MutationError::IndexOutOfRange { index, len });
                    }
                }
            }

            Mutation::UpdateComponentProps { component_id, .. } | Mutation::RemoveComponent { component_id } => {
                if component_path(config, component_id).is_none() {
                    return Err(MutationError::ComponentNotFound(component_id.clone()));
                }
            }

            Mutation::InsertComponent { parent_id, component, .. } => {
                if find_node(&config.blocks, parent_id).is_none() {
                    return Err(MutationError::ParentNotFound(parent_id.clone()));
                }
                let mut ids = IdCollector::default();
                ids.visit_site(config);
                if ids.ids.iter().any(|id| *id == component.id) {
                    return Err(MutationError::DuplicateId(component.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Validate, then produce the next document
    pub fn apply(&self, config: &SiteConfig, registry: &BlockRegistry) -> MutationResult<SiteConfig> {
        self.validate(config, registry)?;

        let next = match self {
            Mutation::UpdateBlockText {
                block_id,
                field,
                value,
                language,
            } => update_block_text(config, block_id, field, value, *language),
            Mutation::UpdateBlockProps { block_id, props } => update_block_props(config, block_id, props),
            Mutation::AddBlock { block_type, props } => add_block(config, registry, block_type, props),
            Mutation::ReorderBlocks { from, to } => reorder_blocks(config, *from, *to),
            Mutation::RemoveBlock { block_id } => remove_block(config, block_id),
            Mutation::UpdateComponentProps { component_id, props } => {
                update_component_props(config, component_id, props)
            }
            Mutation::InsertComponent {
                parent_id,
                index,
                component,
            } => insert_component(config, parent_id, *index, component.clone()),
            Mutation::RemoveComponent { component_id } => remove_component(config, component_id),
        };

        debug!(mutation = self.name(), site_id = %config.id, "Applied mutation");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_document::ComponentKind;

    fn site() -> SiteConfig {
        SiteConfig::new("home", "Home")
            .with_block(BlockInstance::new("a", "navigation"))
            .with_block(
                BlockInstance::new("b", "heroSection").with_child(
                    ComponentInstance::new("row", ComponentKind::Row)
                        .with_child(ComponentInstance::new("label", ComponentKind::Text)),
                ),
            )
            .with_block(BlockInstance::new("c", "textBlock"))
            .with_block(BlockInstance::new("d", "footer"))
    }

    fn ids(config: &SiteConfig) -> Vec<&str> {
        config.blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_reorder() {
        let config = site();
        assert_eq!(ids(&reorder_blocks(&config, 1, 3)), ["a", "c", "d", "b"]);
        assert_eq!(ids(&reorder_blocks(&config, 3, 0)), ["d", "a", "b", "c"]);
        assert_eq!(reorder_blocks(&config, 2, 2), config);
        assert_eq!(reorder_blocks(&config, 9, 0), config);
    }

    #[test]
    fn test_missing_block_is_noop() {
        let config = site();
        assert_eq!(update_block_text(&config, "zz", "title", "x", Language::Ru), config);
        assert_eq!(update_block_props(&config, "zz", &PropBag::new()), config);
        assert_eq!(remove_block(&config, "zz"), config);
    }

    #[test]
    fn test_update_text_uses_policy() {
        let config = update_block_text(&site(), "b", "title", "Sale", Language::En);
        assert_eq!(
            config.find_block("b").unwrap().prop("title"),
            Some(&json!({ "ru": "Sale", "en": "Sale", "uz": "Sale" }))
        );
    }

    #[test]
    fn test_component_ops() {
        let mut partial = PropBag::new();
        partial.insert("text".to_string(), json!("Hi"));
        let config = update_component_props(&site(), "label", &partial);
        let found = find_node(&config.blocks, "label").unwrap();
        assert_eq!(found.node.as_component().unwrap().props.get("text"), Some(&json!("Hi")));

        let config = insert_component(&config, "row", Some(0), ComponentInstance::new("img", ComponentKind::Image));
        assert_eq!(find_node(&config.blocks, "img").unwrap().path, vec![1, 0, 0]);
        assert_eq!(find_node(&config.blocks, "label").unwrap().path, vec![1, 0, 1]);

        let config = insert_component(&config, "c", None, ComponentInstance::new("btn", ComponentKind::Button));
        assert_eq!(find_node(&config.blocks, "btn").unwrap().path, vec![2, 0]);

        let config = remove_component(&config, "label");
        assert!(find_node(&config.blocks, "label").is_none());
        // blocks are not components
        assert_eq!(remove_component(&config, "c"), config);
    }

    #[test]
    fn test_validate() {
        let registry = BlockRegistry::with_builtin_blocks();
        let config = site();

        let err = Mutation::ReorderBlocks { from: 0, to: 4 }.validate(&config, &registry);
        assert_eq!(err, Err(MutationError::IndexOutOfRange { index: 4, len: 4 }));

        let err = Mutation::AddBlock {
            block_type: "carousel3d".to_string(),
            props: PropBag::new(),
        }
        .apply(&config, &registry);
        assert_eq!(err, Err(MutationError::UnknownBlockType("carousel3d".to_string())));

        let err = Mutation::InsertComponent {
            parent_id: "row".to_string(),
            index: None,
            component: ComponentInstance::new("label", ComponentKind::Text),
        }
        .validate(&config, &registry);
        assert_eq!(err, Err(MutationError::DuplicateId("label".to_string())));

        let err = Mutation::RemoveComponent {
            component_id: "b".to_string(),
        }
        .validate(&config, &registry);
        assert_eq!(err, Err(MutationError::ComponentNotFound("b".to_string())));
    }

    #[test]
    fn test_mutation_json() {
        let mutation: Mutation = serde_json::from_value(json!({
            "op": "updateBlockText",
            "blockId": "b",
            "field": "title",
            "value": "Hello",
            "language": "uz"
        }))
        .unwrap();
        assert_eq!(mutation.name(), "updateBlockText");

        let registry = BlockRegistry::with_builtin_blocks();
        let next = mutation.apply(&site(), &registry).unwrap();
        assert!(next.find_block("b").unwrap().prop("title").is_some());

        let add: Mutation = serde_json::from_value(json!({ "op": "addBlock", "blockType": "footerMinimal" })).unwrap();
        assert_eq!(add.apply(&site(), &registry).unwrap().blocks.len(), 5);
    }
}
