/*!
Resolves the value of a variable against the definition table.

# Overview

Resolution is depth-first recursion over two alternating layers:

- An *entry* of the definition table resolves as the disjunction of its derivation trees, taken in registration order.
- A *tree* resolves structurally: a leaf resolves the entry it names, negation and the connectives resolve their operands.

Each entry and each node passes through three states: unresolved, in-progress, and resolved.
The in-progress flag is the cycle guard: re-entering an entry already being resolved answers false immediately, so an unresolved self-referential cycle contributes false and every query terminates.
The resolved state is terminal, and its memoized value is returned on every later request within the run, short-circuiting recomputation of the whole subtree.

Consequences of the tie-break worth noting:

- Resolution never fails.
  A variable nothing defines is false, not an error.
- A value memoized under a cycle's false tie-break persists for the run, so query order can matter to cyclic rule sets.
  Within one run the answers are deterministic: evaluation is left-to-right, first-derivation-first.

# Explanations

A query may be asked to explain itself.
The trace carries one line per variable resolution (memoized, circular, undefined, or freshly derived) and one line per operator application once its operand values are known.
When a trace is requested the disjunction over an entry's derivations is evaluated exhaustively (under the default [configuration](crate::config::Config)), so the trace accounts for every derivation; without a trace the disjunction stops at the first true.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    reports::QueryReport,
    structures::{
        node::{NodeKey, NodeKind},
        op::Op,
        variable::Variable,
    },
};

/// Appends `line` to an active trace.
fn push_trace(trace: &mut Option<Vec<String>>, line: String) {
    if let Some(lines) = trace {
        lines.push(line);
    }
}

impl Context {
    /// The value of `variable`, resolving it if required.
    pub fn evaluate_query(&mut self, variable: Variable) -> bool {
        self.resolve_variable(variable, &mut None)
    }

    /// The value of `variable`, with an explanation of the resolutions made.
    pub fn evaluate_query_explained(&mut self, variable: Variable) -> (bool, Vec<String>) {
        let mut trace = Some(Vec::new());
        let value = self.resolve_variable(variable, &mut trace);
        (value, trace.unwrap_or_default())
    }

    /// Resolves every registered query, in declaration order.
    pub fn solve(&mut self, explain: bool) -> Vec<QueryReport> {
        let queries: Vec<Variable> = self.queries.iter().collect();

        queries
            .into_iter()
            .map(|variable| {
                let (value, trace) = match explain {
                    true => self.evaluate_query_explained(variable),
                    false => (self.evaluate_query(variable), Vec::new()),
                };
                QueryReport {
                    variable,
                    value,
                    trace,
                }
            })
            .collect()
    }

    /// Resolves the definition-table entry for `variable`.
    fn resolve_variable(&mut self, variable: Variable, trace: &mut Option<Vec<String>>) -> bool {
        let (memo, in_progress, derivations) = match self.definitions.entry(variable) {
            None => {
                push_trace(trace, format!("{variable}: not defined, so false"));
                return false;
            }
            Some(entry) => (
                entry.value,
                entry.in_progress,
                entry.derivations().to_vec(),
            ),
        };

        if let Some(value) = memo {
            self.counters.memo_hits += 1;
            push_trace(trace, format!("{variable}: already resolved, {value}"));
            return value;
        }

        if in_progress {
            self.counters.cycle_breaks += 1;
            log::trace!(target: targets::SOLVE, "Cycle broken at {variable}");
            push_trace(trace, format!("{variable}: circular, so false"));
            return false;
        }

        if let Some(entry) = self.definitions.entry_mut(variable) {
            entry.in_progress = true;
        }

        let exhaustive = trace.is_some() && self.config.exhaustive_explanations;

        let mut value = false;
        for root in &derivations {
            value |= self.resolve_node(*root, trace);
            if value && !exhaustive {
                break;
            }
        }

        if let Some(entry) = self.definitions.entry_mut(variable) {
            entry.value = Some(value);
            entry.in_progress = false;
        }

        match derivations.len() {
            0 => push_trace(trace, format!("{variable}: no derivation, so false")),
            count => push_trace(
                trace,
                format!("{variable}: {value} by disjunction of {count} derivation(s)"),
            ),
        }

        value
    }

    /// Resolves the tree node at `key`.
    fn resolve_node(&mut self, key: NodeKey, trace: &mut Option<Vec<String>>) -> bool {
        let (kind, memo) = {
            let node = self.nodes.node(key);
            (node.kind, node.value)
        };

        if let Some(value) = memo {
            return value;
        }

        self.nodes.node_mut(key).in_progress = true;

        let value = match kind {
            NodeKind::Leaf(variable) => self.resolve_variable(variable, trace),

            NodeKind::Not(operand) => {
                let operand = self.resolve_node(operand, trace);
                push_trace(trace, format!("! {operand} = {}", !operand));
                !operand
            }

            NodeKind::Binary(op, left, right) => match trace {
                // With a trace both operand values are wanted, so no short-circuit.
                Some(_) => {
                    let left = self.resolve_node(left, trace);
                    let right = self.resolve_node(right, trace);
                    let value = op.apply(left, right);
                    push_trace(trace, format!("{left} {op} {right} = {value}"));
                    value
                }

                None => match op {
                    Op::And => self.resolve_node(left, trace) && self.resolve_node(right, trace),
                    Op::Or => self.resolve_node(left, trace) || self.resolve_node(right, trace),
                    Op::Xor => self.resolve_node(left, trace) != self.resolve_node(right, trace),
                },
            },
        };

        let node = self.nodes.node_mut(key);
        node.value = Some(value);
        node.in_progress = false;

        value
    }
}
