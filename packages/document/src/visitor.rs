use crate::model::{BlockInstance, ComponentInstance, SiteConfig};

/// Visitor pattern for traversing site documents immutably
///
/// Default implementations walk the entire tree in document order.
/// Override specific visit_* methods to act on nodes.
pub trait Visitor: Sized {
    fn visit_site(&mut self, site: &SiteConfig) {
        walk_site(self, site);
    }

    fn visit_block(&mut self, block: &BlockInstance) {
        walk_block(self, block);
    }

    fn visit_component(&mut self, component: &ComponentInstance) {
        walk_component(self, component);
    }
}

pub fn walk_site<V: Visitor>(visitor: &mut V, site: &SiteConfig) {
    for block in &site.blocks {
        visitor.visit_block(block);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &BlockInstance) {
    for child in block.children() {
        visitor.visit_component(child);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &ComponentInstance) {
    for child in component.children() {
        visitor.visit_component(child);
    }
}

/// Collects every block and component id in a document
#[derive(Debug, Default)]
pub struct IdCollector {
    pub ids: Vec<String>,
}

impl Visitor for IdCollector {
    fn visit_block(&mut self, block: &BlockInstance) {
        self.ids.push(block.id.clone());
        walk_block(self, block);
    }

    fn visit_component(&mut self, component: &ComponentInstance) {
        self.ids.push(component.id.clone());
        walk_component(self, component);
    }
}

/// Node counts, used for summaries
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    pub blocks: usize,
    pub components: usize,
}

impl Visitor for NodeCounter {
    fn visit_block(&mut self, block: &BlockInstance) {
        self.blocks += 1;
        walk_block(self, block);
    }

    fn visit_component(&mut self, component: &ComponentInstance) {
        self.components += 1;
        walk_component(self, component);
    }
}
