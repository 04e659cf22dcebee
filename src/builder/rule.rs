use crate::{
    compiler::{self},
    context::Context,
    misc::log::targets::{self},
    structures::node::Node,
    types::err::{ErrorKind, RuleError},
};

/// Whether `character` may appear in a rule line.
fn rule_character(character: char) -> bool {
    matches!(
        character,
        'A'..='Z' | '=' | '!' | '<' | '>' | '+' | '|' | '^' | '(' | ')'
    )
}

/// Splits a rule on its implication operator.
///
/// Exactly one run of relation characters may appear, and it must read `=>` or `<=>`.
/// The left side is the condition under either operator.
fn split_implication(rule: &str) -> Result<(&str, &str), RuleError> {
    let relational = |character: char| matches!(character, '<' | '=' | '>');

    let start = match rule.find(relational) {
        Some(index) => index,
        None => return Err(RuleError::Structure),
    };
    let end = rule[start..]
        .find(|character| !relational(character))
        .map_or(rule.len(), |offset| start + offset);

    if rule[end..].contains(relational) {
        return Err(RuleError::Structure);
    }

    match &rule[start..end] {
        "=>" | "<=>" => Ok((&rule[..start], &rule[end..])),
        _ => Err(RuleError::Structure),
    }
}

impl Context {
    /// Registers a rule line, returning how many derivations it expanded to.
    ///
    /// A conjunctive conclusion (`… => C+D`) registers one independent clone of the condition per concluded variable, as each registered tree carries its own evaluation state.
    /// A negated conclusion variable registers the negation of the condition instead.
    pub(super) fn register_rule(&mut self, text: &str) -> Result<usize, ErrorKind> {
        let rule: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        if !rule.chars().all(rule_character) {
            return Err(ErrorKind::from(RuleError::InvalidCharacters));
        }

        let (left, right) = split_implication(&rule)?;
        if left.is_empty() || right.is_empty() {
            return Err(ErrorKind::from(RuleError::Structure));
        }

        let condition = compiler::compile(left)?;
        let conclusion = compiler::compile(right)?;

        if conclusion.as_str().contains(['|', '^']) {
            return Err(ErrorKind::from(RuleError::RightSideOperator));
        }

        if !compiler::is_valid_rpn(condition.as_str())
            || !compiler::is_valid_rpn(conclusion.as_str())
        {
            return Err(ErrorKind::from(RuleError::Structure));
        }

        let mut template = None;
        let mut count = 0;

        for (variable, negated) in conclusion.variable_units() {
            // The first conclusion takes a freshly built condition, the rest clone it.
            let tree = match template {
                None => {
                    let built = self.build_tree(&condition);
                    template = Some(built);
                    built
                }
                Some(built) => self.nodes.clone_tree(built),
            };

            let root = match negated {
                false => tree,
                true => self.nodes.insert(Node::not(tree)),
            };

            self.definitions.add_derivation(variable, root);
            self.counters.derivations += 1;
            count += 1;
        }

        log::trace!(
            target: targets::REGISTRY,
            "Registered {rule} as {} with {count} conclusion(s)",
            condition.as_str(),
        );

        Ok(count)
    }
}
