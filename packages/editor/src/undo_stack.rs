//! # Undo/Redo Stack
//!
//! Snapshot history for a builder session. Documents are immutable values,
//! so undo is just stepping back to a previously committed snapshot.
//!
//! - Each commit records the snapshot it replaced
//! - Undo moves the current snapshot to the redo stack
//! - A new commit clears the redo stack
//! - Batches group several commits into one undo step; undo and redo are
//!   unavailable while one is open

use std::sync::Arc;
use storefront_document::SiteConfig;

/// One undo step: the document as it was before the step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: Arc<SiteConfig>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct UndoStack {
    /// Most recent last
    undo_stack: Vec<HistoryEntry>,

    /// Most recent last
    redo_stack: Vec<HistoryEntry>,

    /// 0 = unlimited
    max_levels: usize,

    /// Snapshot at the start of the open batch, once something was committed
    current_batch: Option<Option<HistoryEntry>>,
}

impl UndoStack {
    /// Undo stack keeping 100 levels
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record `previous` as the state to return to on undo
    pub fn record(&mut self, previous: Arc<SiteConfig>, description: Option<String>) {
        let entry = HistoryEntry {
            snapshot: previous,
            description,
        };

        match &mut self.current_batch {
            // only the first commit of a batch holds the pre-batch state
            Some(batch) => {
                if batch.is_none() {
                    *batch = Some(entry);
                    self.redo_stack.clear();
                }
            }
            None => self.push_entry(entry),
        }
    }

    pub fn begin_batch(&mut self) {
        if self.current_batch.is_none() {
            self.current_batch = Some(None);
        }
    }

    /// Close the open batch and push it as a single undo step
    pub fn end_batch(&mut self, description: Option<String>) {
        if let Some(Some(mut entry)) = self.current_batch.take() {
            if description.is_some() {
                entry.description = description;
            }
            self.push_entry(entry);
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Step back. `current` goes to the redo stack and the restored snapshot
    /// is returned; `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Arc<SiteConfig>) -> Option<Arc<SiteConfig>> {
        if self.is_batching() {
            return None;
        }
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });
        Some(entry.snapshot)
    }

    pub fn redo(&mut self, current: Arc<SiteConfig>) -> Option<Arc<SiteConfig>> {
        if self.is_batching() {
            return None;
        }
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.is_batching() && !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_batching() && !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
