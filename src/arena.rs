use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::parts::{AssemblyKind, Part};

/// Payload of a tree node: either a named sub-assembly or an atomic part.
///
/// Assemblies carry no price field at all; their price is always the sum
/// over their children.
#[derive(Debug)]
pub enum NodePayload {
    Assembly(AssemblyKind),
    Part(Part),
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct ComponentNode {
    /// Component payload for this node
    pub payload: NodePayload,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Handle to an assembly node.
///
/// Only assemblies can receive children, so the attachment API takes
/// this type rather than a raw index. Attaching a child to a part is
/// not expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyId(pub(crate) Index);

/// Handle to a part node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartId(pub(crate) Index);

/// Arena-based component tree.
///
/// Uses generational arena for memory-safe node references and O(1)
/// lookups. The tree is append-only: nodes are attached during setup and
/// never removed or reparented afterwards.
#[derive(Debug)]
pub struct ComponentTree {
    /// Arena storage for all tree nodes
    arena: Arena<ComponentNode>,
    /// Index of the root assembly, None for empty trees
    root: Option<AssemblyId>,
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Attaches an assembly, as root when `parent` is None.
    #[instrument(level = "trace", skip(self))]
    pub fn add_assembly(&mut self, kind: AssemblyKind, parent: Option<AssemblyId>) -> AssemblyId {
        let idx = self.insert_node(NodePayload::Assembly(kind), parent);
        if parent.is_none() {
            self.root = Some(AssemblyId(idx));
        }
        AssemblyId(idx)
    }

    /// Attaches a part under an assembly. Parts never take children.
    #[instrument(level = "trace", skip(self))]
    pub fn add_part(&mut self, part: Part, parent: AssemblyId) -> PartId {
        PartId(self.insert_node(NodePayload::Part(part), Some(parent)))
    }

    fn insert_node(&mut self, payload: NodePayload, parent: Option<AssemblyId>) -> Index {
        let node = ComponentNode {
            payload,
            parent: parent.map(|p| p.0),
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(AssemblyId(parent_idx)) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&ComponentNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<AssemblyId> {
        self.root
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Aggregate price of the whole build. Empty trees price at 0.
    #[instrument(level = "debug", skip(self))]
    pub fn total_price(&self) -> u64 {
        self.root.map(|r| self.price(r.0)).unwrap_or(0)
    }

    /// Aggregate price of one sub-assembly: the sum over its children.
    #[instrument(level = "debug", skip(self))]
    pub fn assembly_price(&self, id: AssemblyId) -> u64 {
        self.price(id.0)
    }

    /// Display name of an assembly node.
    pub fn assembly_name(&self, id: AssemblyId) -> &'static str {
        match self.get_node(id.0).map(|n| &n.payload) {
            Some(NodePayload::Assembly(kind)) => kind.display_name(),
            _ => "",
        }
    }

    pub(crate) fn price(&self, node_idx: Index) -> u64 {
        match self.get_node(node_idx) {
            Some(node) => match &node.payload {
                NodePayload::Part(part) => part.price,
                NodePayload::Assembly(_) => node
                    .children
                    .iter()
                    .map(|&child| self.price(child))
                    .sum(),
            },
            None => 0,
        }
    }

    /// Finds the first assembly of the given kind in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn find_assembly(&self, kind: AssemblyKind) -> Option<AssemblyId> {
        self.iter().find_map(|(idx, node)| match node.payload {
            NodePayload::Assembly(k) if k == kind => Some(AssemblyId(idx)),
            _ => None,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root.0)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all atomic parts in traversal order.
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn parts(&self) -> Vec<&Part> {
        let mut parts = Vec::new();
        if let Some(root) = self.root {
            self.collect_parts(root.0, &mut parts);
        }
        parts
    }

    fn collect_parts<'a>(&'a self, node_idx: Index, parts: &mut Vec<&'a Part>) {
        if let Some(node) = self.get_node(node_idx) {
            match &node.payload {
                NodePayload::Part(part) => parts.push(part),
                NodePayload::Assembly(_) => {
                    for &child in &node.children {
                        self.collect_parts(child, parts);
                    }
                }
            }
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a ComponentTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a ComponentTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root.0);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a ComponentNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
