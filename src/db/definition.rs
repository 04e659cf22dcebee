/*!
The definition table --- what is known about each variable, accessed via fields on a [DefinitionDB] struct.

Each entry holds:
- An ordered collection of derivation roots, one per registered rule concluding the variable, read as their disjunction.
- Evaluation state for the entry as a whole: a memoized value and an in-progress flag used to break cycles.

Entries are created during registration (or as empty placeholders when a leaf references a variable nothing yet defines) and never removed during a run.
Adding a derivation appends, it never replaces: rules concluding the same variable compose by disjunction.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{node::NodeKey, variable::Variable},
};

/// What is known about a single variable.
pub struct DefinitionEntry {
    /// Roots of the trees able to derive the variable, in registration order.
    derivations: Vec<NodeKey>,

    /// Whether a constant-true derivation has been recorded for the variable.
    fact: bool,

    /// The memoized value of the entry, if resolved.
    pub value: Option<bool>,

    /// Whether the entry is part of an in-progress resolution.
    pub in_progress: bool,
}

impl DefinitionEntry {
    fn new() -> Self {
        DefinitionEntry {
            derivations: Vec::new(),
            fact: false,
            value: None,
            in_progress: false,
        }
    }

    /// Roots of the trees able to derive the variable, in registration order.
    pub fn derivations(&self) -> &[NodeKey] {
        &self.derivations
    }

    /// Whether a constant-true derivation has been recorded for the variable.
    pub fn is_fact(&self) -> bool {
        self.fact
    }
}

/// The definition table.
#[derive(Default)]
pub struct DefinitionDB {
    /// An entry per variable some rule, fact, or leaf has mentioned.
    entries: HashMap<Variable, DefinitionEntry>,
}

impl DefinitionDB {
    /// The entry for `variable`, if any.
    pub fn entry(&self, variable: Variable) -> Option<&DefinitionEntry> {
        self.entries.get(&variable)
    }

    /// Mutable access to the entry for `variable`, if any.
    pub fn entry_mut(&mut self, variable: Variable) -> Option<&mut DefinitionEntry> {
        self.entries.get_mut(&variable)
    }

    /// The entry for `variable`, created as an empty placeholder if absent.
    ///
    /// Leaves call this during tree construction so forward references resolve by name at evaluation time.
    pub fn ensure_entry(&mut self, variable: Variable) -> &mut DefinitionEntry {
        self.entries
            .entry(variable)
            .or_insert_with(DefinitionEntry::new)
    }

    /// Appends the tree rooted at `root` to the derivations of `variable`.
    pub fn add_derivation(&mut self, variable: Variable, root: NodeKey) {
        log::trace!(target: targets::DEFINITION_DB, "Derivation added for {variable}");
        self.ensure_entry(variable).derivations.push(root);
    }

    /// Records a constant-true derivation for `variable`, unless one is already present.
    ///
    /// Facts are lower bounds: the entry keeps every rule-derived tree it holds, and by disjunction the fact never displaces a derivation already resolving true.
    pub fn add_fact(&mut self, variable: Variable, root: NodeKey) {
        let entry = self.ensure_entry(variable);
        if !entry.fact {
            log::trace!(target: targets::DEFINITION_DB, "Fact recorded for {variable}");
            entry.derivations.push(root);
            entry.fact = true;
        }
    }

    /// The variables with an entry, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.entries.keys().copied()
    }

    /// A count of entries in the table.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
