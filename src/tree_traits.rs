use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::{ComponentNode, ComponentTree, NodePayload};

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for ComponentTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_id) = self.root() {
            let root_idx = root_id.0;
            let mut tree = Tree::new(node_label(self, root_idx));

            fn build_tree(arena: &ComponentTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        let mut child_tree = Tree::new(node_label(arena, child_idx));
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty build".to_string())
        }
    }
}

/// Label for one node: assemblies show their aggregate price, parts
/// their fixed one.
fn node_label(tree: &ComponentTree, idx: Index) -> String {
    match tree.get_node(idx) {
        Some(ComponentNode {
            payload: NodePayload::Assembly(kind),
            ..
        }) => format!("{} ({} AED)", kind.display_name(), tree.price(idx)),
        Some(ComponentNode {
            payload: NodePayload::Part(part),
            ..
        }) => part.to_string(),
        None => String::new(),
    }
}
