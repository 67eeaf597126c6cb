//! # Storefront Editor
//!
//! Editing engine for storefront pages.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: JSON → SiteConfig                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: BuilderContext + mutations          │
//! │  - Load/save sites through a SiteStore      │
//! │  - Pure edits producing new snapshots       │
//! │  - Undo/redo over snapshots                 │
//! │  - Snapshot subscription for consumers      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ blocks: SiteConfig → VNode → HTML           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_editor::{load_or_default, BuilderContext, FileStore};
//!
//! let registry = Arc::new(BlockRegistry::with_builtin_blocks());
//! let store = FileStore::new("sites");
//! let site = load_or_default(&store, "home", &registry)?;
//!
//! let mut ctx = BuilderContext::builder(site, registry);
//! ctx.update_block_text("hero-1", "title", "Sale", Language::En)?;
//! ctx.save(&store)?;
//! ```

mod errors;
mod localized;
mod mutations;
mod preferences;
mod session;
mod storage;
mod undo_stack;

pub use errors::{EditorError, EditorResult, StoreError, StoreResult};
pub use localized::{next_localized_text, update_localized_field, update_localized_value};
pub use mutations::{
    add_block, insert_component, new_block, remove_block, remove_component, reorder_blocks, update_block_props,
    update_block_text, update_component_props, Mutation, MutationError, MutationResult,
};
pub use preferences::Preferences;
pub use session::BuilderContext;
pub use storage::{load_or_default, FileStore, MemoryStore, SiteStore};
pub use undo_stack::{HistoryEntry, UndoStack};
