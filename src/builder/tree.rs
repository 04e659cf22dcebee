use crate::{
    context::Context,
    structures::{
        node::{Node, NodeKey},
        rpn::{Rpn, RpnUnit},
    },
};

impl Context {
    /// Builds the tree of a compiled condition, returning the root.
    ///
    /// A single left-to-right scan over the units with an explicit operand stack: a variable pushes a leaf, a negated variable pushes a negation wrapped directly around a fresh leaf, and a binary operator pops its right then left operands.
    /// Each leaf also ensures the referenced variable holds a slot in the definition table, so forward references resolve by name at evaluation time.
    ///
    /// # Panics
    /// If the expression is not [valid](crate::compiler::is_valid_rpn) --- validity is the caller's obligation, and the builder fails fast rather than guessing at a malformed expression.
    pub(super) fn build_tree(&mut self, rpn: &Rpn) -> NodeKey {
        let mut stack: Vec<NodeKey> = Vec::new();

        for unit in rpn.units() {
            match unit {
                RpnUnit::Variable(variable) => {
                    self.definitions.ensure_entry(variable);
                    let leaf = self.nodes.insert(Node::leaf(variable));
                    stack.push(leaf);
                }

                RpnUnit::NegatedVariable(variable) => {
                    self.definitions.ensure_entry(variable);
                    let leaf = self.nodes.insert(Node::leaf(variable));
                    let negation = self.nodes.insert(Node::not(leaf));
                    stack.push(negation);
                }

                RpnUnit::Operator(op) => {
                    let right = stack.pop();
                    let left = stack.pop();
                    match (left, right) {
                        (Some(left), Some(right)) => {
                            let parent = self.nodes.insert(Node::binary(op, left, right));
                            stack.push(parent);
                        }
                        _ => panic!("Operator {op} is missing an operand in {rpn}"),
                    }
                }
            }
        }

        match stack.pop() {
            Some(root) if stack.is_empty() => root,
            _ => panic!("{rpn} does not reduce to a single tree"),
        }
    }
}
