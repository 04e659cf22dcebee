/*!
A graph rendering of the definition table, for external visualizers.

The rendering reads only the public accessors of the [definition table](crate::db::definition::DefinitionDB) and [node store](crate::db::node::NodeStore) --- variable, node kind, children, resolved value --- and never touches evaluation state, so it may be taken before, between, or after queries.

Variables are shared: every leaf referencing a variable points at the variable's single graph node, so the rendering shows the dependency structure of the rule set, cycles included.
*/

use std::collections::HashMap;

use petgraph::{
    dot::{Config as DotConfig, Dot},
    stable_graph::{NodeIndex, StableGraph},
};

use crate::{
    context::Context,
    structures::{node::NodeKey, node::NodeKind, variable::Variable},
};

/// The definition table of `context` as a graph with labeled nodes.
pub fn definition_graph(context: &Context) -> StableGraph<String, usize> {
    let mut graph: StableGraph<String, usize> = StableGraph::new();
    let mut variable_indices: HashMap<Variable, NodeIndex> = HashMap::new();

    let mut variables: Vec<Variable> = context.definitions.variables().collect();
    variables.sort_unstable();

    for variable in &variables {
        let label = match context.definitions.entry(*variable).and_then(|e| e.value) {
            Some(value) => format!("{variable} = {value}"),
            None => variable.to_string(),
        };
        variable_indices.insert(*variable, graph.add_node(label));
    }

    for variable in &variables {
        let Some(entry) = context.definitions.entry(*variable) else {
            continue;
        };
        let Some(index) = variable_indices.get(variable).copied() else {
            continue;
        };

        for (ordinal, root) in entry.derivations().iter().enumerate() {
            let subtree = add_tree(&mut graph, &variable_indices, context, *root);
            graph.add_edge(index, subtree, ordinal);
        }
    }

    graph
}

/// The definition table of `context` in DOT format.
pub fn render_dot(context: &Context) -> String {
    let graph = definition_graph(context);
    format!("{}", Dot::with_config(&graph, &[DotConfig::EdgeNoLabel]))
}

fn add_tree(
    graph: &mut StableGraph<String, usize>,
    variable_indices: &HashMap<Variable, NodeIndex>,
    context: &Context,
    key: NodeKey,
) -> NodeIndex {
    match context.nodes.node(key).kind {
        NodeKind::Leaf(variable) => match variable_indices.get(&variable) {
            Some(index) => *index,
            // Every leaf variable holds a table slot, so this is only reachable over a foreign key.
            None => graph.add_node(variable.to_string()),
        },

        NodeKind::Not(operand) => {
            let index = graph.add_node("!".to_string());
            let operand = add_tree(graph, variable_indices, context, operand);
            graph.add_edge(index, operand, 0);
            index
        }

        NodeKind::Binary(op, left, right) => {
            let index = graph.add_node(op.to_string());
            let left = add_tree(graph, variable_indices, context, left);
            let right = add_tree(graph, variable_indices, context, right);
            graph.add_edge(index, left, 0);
            graph.add_edge(index, right, 1);
            index
        }
    }
}
