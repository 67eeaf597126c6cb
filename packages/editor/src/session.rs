//! # Builder Context
//!
//! Holds the document for one mounted page. The mode is fixed when the context
//! is built: render mode is read-only, builder mode accepts edits.
//!
//! Every committed edit replaces the current snapshot with a new
//! `Arc<SiteConfig>` and publishes it through a [`Store`]. Consumers that
//! captured an older snapshot keep reading it unchanged.

use crate::errors::{EditorError, EditorResult};
use crate::mutations::{self, Mutation};
use crate::storage::SiteStore;
use crate::undo_stack::UndoStack;
use std::sync::Arc;
use storefront_blocks::{BlockRegistry, RenderContext, VNode, ViewMode};
use storefront_common::{Store, Subscription};
use storefront_document::{ComponentInstance, Language, PropBag, SiteConfig};
use tracing::{debug, info};

pub struct BuilderContext {
    mode: ViewMode,
    registry: Arc<BlockRegistry>,
    snapshots: Store<Arc<SiteConfig>>,
    history: UndoStack,
    /// Increments on every commit, undo and redo
    version: u64,
    dirty: bool,
}

impl BuilderContext {
    pub fn new(site: SiteConfig, registry: Arc<BlockRegistry>, mode: ViewMode) -> Self {
        Self {
            mode,
            registry,
            snapshots: Store::new(Arc::new(site)),
            history: UndoStack::new(),
            version: 0,
            dirty: false,
        }
    }

    /// Read-only context for visitors
    pub fn render_mode(site: SiteConfig, registry: Arc<BlockRegistry>) -> Self {
        Self::new(site, registry, ViewMode::Render)
    }

    pub fn builder(site: SiteConfig, registry: Arc<BlockRegistry>) -> Self {
        Self::new(site, registry, ViewMode::Builder)
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_builder(&self) -> bool {
        self.mode.is_builder()
    }

    /// Current snapshot
    pub fn site(&self) -> Arc<SiteConfig> {
        self.snapshots.get()
    }

    /// Notified with every new snapshot
    pub fn subscribe(&self) -> Subscription<Arc<SiteConfig>> {
        self.snapshots.subscribe()
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether there are edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn render(&self, ctx: &RenderContext) -> VNode {
        let ctx = RenderContext {
            mode: self.mode,
            ..ctx.clone()
        };
        self.registry.render_page(&self.site(), &ctx)
    }

    pub fn update_block_text(&mut self, block_id: &str, field: &str, value: &str, language: Language) -> EditorResult<()> {
        self.edit("Edit text", |site| {
            mutations::update_block_text(site, block_id, field, value, language)
        })
    }

    pub fn update_block_props(&mut self, block_id: &str, props: &PropBag) -> EditorResult<()> {
        self.edit("Edit block", |site| mutations::update_block_props(site, block_id, props))
    }

    /// Append a block of `block_type`. Returns the new block's id, or `None`
    /// when the type is not registered.
    pub fn add_block(&mut self, block_type: &str, overrides: &PropBag) -> EditorResult<Option<String>> {
        self.ensure_builder()?;
        let site = self.site();
        let Some(block) = mutations::new_block(&site, &self.registry, block_type, overrides) else {
            debug!(block_type, "Add block skipped, type not registered");
            return Ok(None);
        };

        let id = block.id.clone();
        let mut next = (*site).clone();
        next.blocks.push(block);
        self.commit(next, "Add block");
        Ok(Some(id))
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> EditorResult<()> {
        self.edit("Move block", |site| mutations::reorder_blocks(site, from, to))
    }

    pub fn remove(&mut self, block_id: &str) -> EditorResult<()> {
        self.edit("Remove block", |site| mutations::remove_block(site, block_id))
    }

    pub fn update_component_props(&mut self, component_id: &str, props: &PropBag) -> EditorResult<()> {
        self.edit("Edit element", |site| {
            mutations::update_component_props(site, component_id, props)
        })
    }

    pub fn insert_component(&mut self, parent_id: &str, index: Option<usize>, component: ComponentInstance) -> EditorResult<()> {
        self.edit("Insert element", move |site| {
            mutations::insert_component(site, parent_id, index, component)
        })
    }

    pub fn remove_component(&mut self, component_id: &str) -> EditorResult<()> {
        self.edit("Remove element", |site| mutations::remove_component(site, component_id))
    }

    /// Apply a serialized edit, failing when its target does not exist
    pub fn apply(&mut self, mutation: &Mutation) -> EditorResult<()> {
        self.ensure_builder()?;
        let next = mutation.apply(&self.site(), &self.registry)?;
        self.commit(next, mutation.name());
        Ok(())
    }

    /// Group the following edits into one undo step
    pub fn begin_batch(&mut self) -> EditorResult<()> {
        self.ensure_builder()?;
        self.history.begin_batch();
        Ok(())
    }

    pub fn end_batch(&mut self, description: impl Into<String>) {
        self.history.end_batch(Some(description.into()));
    }

    /// Returns whether there was anything to undo
    pub fn undo(&mut self) -> EditorResult<bool> {
        self.ensure_builder()?;
        if self.history.is_batching() {
            return Err(EditorError::BatchOpen);
        }
        match self.history.undo(self.site()) {
            Some(previous) => {
                self.publish(previous);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> EditorResult<bool> {
        self.ensure_builder()?;
        if self.history.is_batching() {
            return Err(EditorError::BatchOpen);
        }
        match self.history.redo(self.site()) {
            Some(next) => {
                self.publish(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist the current snapshot and clear the dirty flag
    pub fn save(&mut self, store: &dyn SiteStore) -> EditorResult<()> {
        let site = self.site();
        store.save(&site)?;
        self.dirty = false;
        info!(site_id = %site.id, version = self.version, "Site saved");
        Ok(())
    }

    fn ensure_builder(&self) -> EditorResult<()> {
        if self.is_builder() {
            Ok(())
        } else {
            Err(EditorError::ReadOnly)
        }
    }

    fn edit(&mut self, description: &str, f: impl FnOnce(&SiteConfig) -> SiteConfig) -> EditorResult<()> {
        self.ensure_builder()?;
        let site = self.site();
        let next = f(&site);
        self.commit(next, description);
        Ok(())
    }

    /// Publish `next` unless it equals the current snapshot
    fn commit(&mut self, next: SiteConfig, description: &str) -> bool {
        let current = self.site();
        if *current == next {
            debug!(description, "Edit changed nothing");
            return false;
        }

        self.history.record(current, Some(description.to_string()));
        self.publish(Arc::new(next));
        true
    }

    fn publish(&mut self, snapshot: Arc<SiteConfig>) {
        self.snapshots.set(snapshot);
        self.version += 1;
        self.dirty = true;
        debug!(version = self.version, "Published snapshot");
    }
}
