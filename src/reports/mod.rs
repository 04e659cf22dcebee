/*!
Reports for the context.
*/

use crate::structures::variable::Variable;

pub mod graph;

/// The outcome of one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryReport {
    /// The queried variable.
    pub variable: Variable,

    /// The resolved value.
    pub value: bool,

    /// The explanation trace, empty unless one was requested.
    pub trace: Vec<String>,
}

impl std::fmt::Display for QueryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is {}", self.variable, self.value)
    }
}
