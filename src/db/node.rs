/*!
The node store --- a keyed arena of expression nodes.

Nodes reference each other by [NodeKey] into the store, never by ownership, which keeps trees referencing shared definitions free of ownership cycles.
Keys are never removed during a run, so a key obtained from the store remains valid for the life of the context.
*/

use slotmap::SlotMap;

use crate::structures::node::{Node, NodeKey, NodeKind};

/// The node store.
#[derive(Default)]
pub struct NodeStore {
    /// Every node of every tree built during the run.
    nodes: SlotMap<NodeKey, Node>,
}

impl NodeStore {
    /// Stores `node`, returning its key.
    pub fn insert(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// The node at `key`.
    ///
    /// # Panics
    /// If `key` was not obtained from this store.
    pub fn node(&self, key: NodeKey) -> &Node {
        &self.nodes[key]
    }

    /// Mutable access to the node at `key`.
    ///
    /// # Panics
    /// If `key` was not obtained from this store.
    pub fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key]
    }

    /// A count of nodes in the store.
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// A structural copy of the tree rooted at `root`, with fresh evaluation state throughout.
    ///
    /// Expanded conclusions clone their condition rather than sharing it, as each registered tree resolves independently.
    pub fn clone_tree(&mut self, root: NodeKey) -> NodeKey {
        match self.nodes[root].kind {
            NodeKind::Leaf(variable) => self.insert(Node::leaf(variable)),

            NodeKind::Not(operand) => {
                let operand = self.clone_tree(operand);
                self.insert(Node::not(operand))
            }

            NodeKind::Binary(op, left, right) => {
                let left = self.clone_tree(left);
                let right = self.clone_tree(right);
                self.insert(Node::binary(op, left, right))
            }
        }
    }

    /// The tree rooted at `root`, re-serialized as a parenthesized infix expression.
    pub fn render_infix(&self, root: NodeKey) -> String {
        match self.nodes[root].kind {
            NodeKind::Leaf(variable) => variable.to_string(),

            NodeKind::Not(operand) => match self.nodes[operand].kind {
                NodeKind::Leaf(variable) => format!("!{variable}"),
                _ => format!("!({})", self.render_infix(operand)),
            },

            NodeKind::Binary(op, left, right) => format!(
                "({}{}{})",
                self.render_infix(left),
                op.symbol(),
                self.render_infix(right)
            ),
        }
    }
}
