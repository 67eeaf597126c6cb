//! # Node Lookup
//!
//! Depth-first search over a page's block list and the component trees the
//! blocks own. Blocks are the roots; components nest through `children`.
//!
//! Paths are index paths from the root: `[block_index]` addresses a block,
//! `[block_index, child_index, ...]` addresses a component. Duplicate ids are
//! a caller error; lookups return the first match in document order.

use crate::model::{BlockInstance, ComponentInstance};

/// Borrowed node from either level of the tree
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Block(&'a BlockInstance),
    Component(&'a ComponentInstance),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            NodeRef::Block(block) => &block.id,
            NodeRef::Component(component) => &component.id,
        }
    }

    pub fn children(&self) -> &'a [ComponentInstance] {
        match self {
            NodeRef::Block(block) => block.children(),
            NodeRef::Component(component) => component.children(),
        }
    }

    pub fn as_block(&self) -> Option<&'a BlockInstance> {
        match self {
            NodeRef::Block(block) => Some(block),
            NodeRef::Component(_) => None,
        }
    }

    pub fn as_component(&self) -> Option<&'a ComponentInstance> {
        match self {
            NodeRef::Component(component) => Some(component),
            NodeRef::Block(_) => None,
        }
    }
}

/// Result of [`find_node`]
#[derive(Debug, Clone)]
pub struct NodeMatch<'a> {
    pub node: NodeRef<'a>,
    /// `None` for top-level blocks
    pub parent: Option<NodeRef<'a>>,
    /// Position within the parent's children (or the block list)
    pub index: usize,
    pub path: Vec<usize>,
}

impl NodeMatch<'_> {
    /// Index of the top-level block that owns this node
    pub fn block_index(&self) -> usize {
        self.path[0]
    }
}

pub fn find_node<'a>(blocks: &'a [BlockInstance], id: &str) -> Option<NodeMatch<'a>> {
    let mut path = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        path.push(index);
        let node = NodeRef::Block(block);

        if block.id == id {
            return Some(NodeMatch {
                node,
                parent: None,
                index,
                path,
            });
        }

        if let Some(found) = search_children(node, id, &mut path) {
            return Some(found);
        }

        path.pop();
    }

    None
}

fn search_children<'a>(parent: NodeRef<'a>, id: &str, path: &mut Vec<usize>) -> Option<NodeMatch<'a>> {
    for (index, child) in parent.children().iter().enumerate() {
        path.push(index);
        let node = NodeRef::Component(child);

        if child.id == id {
            return Some(NodeMatch {
                node,
                parent: Some(parent),
                index,
                path: path.clone(),
            });
        }

        if let Some(found) = search_children(node, id, path) {
            return Some(found);
        }

        path.pop();
    }

    None
}

/// The top-level block owning the component `component_id`.
///
/// A block id is not a component id; passing one returns `None`.
pub fn find_block_for_component<'a>(
    blocks: &'a [BlockInstance],
    component_id: &str,
) -> Option<&'a BlockInstance> {
    let found = find_node(blocks, component_id)?;
    found.node.as_component()?;
    blocks.get(found.block_index())
}

/// Mutable access to the component at `path` (length two or more)
pub fn component_at_path_mut<'a>(
    blocks: &'a mut [BlockInstance],
    path: &[usize],
) -> Option<&'a mut ComponentInstance> {
    let (block_index, rest) = path.split_first()?;
    let (first, rest) = rest.split_first()?;
    let block = blocks.get_mut(*block_index)?;
    let mut current = block.children.as_mut()?.get_mut(*first)?;

    for index in rest {
        current = current.children.as_mut()?.get_mut(*index)?;
    }

    Some(current)
}

/// Mutable child list of the node at `path`, created empty if absent
pub fn children_at_path_mut<'a>(
    blocks: &'a mut [BlockInstance],
    path: &[usize],
) -> Option<&'a mut Vec<ComponentInstance>> {
    match path {
        [] => None,
        [block_index] => {
            let block = blocks.get_mut(*block_index)?;
            Some(block.children.get_or_insert_with(Vec::new))
        }
        _ => {
            let component = component_at_path_mut(blocks, path)?;
            Some(component.children.get_or_insert_with(Vec::new))
        }
    }
}
