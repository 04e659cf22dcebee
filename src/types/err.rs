//! Error types used in the library.
//!
//! - All of these are static content errors, fatal to the registration pass: the first one encountered aborts the load, and no partial rule set is evaluated.
//! - None occur during evaluation --- absent variables and unresolved cycles resolve to false rather than raising an error, so a loaded context always answers its queries.

/// The general error, wrapping the error of each phase of a load.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Compile(CompileError),
    Rule(RuleError),
    Validation(ValidationError),
}

/// Noted errors while compiling one side of a rule to postfix form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompileError {
    /// A character outside the expression grammar.
    InvalidCharacter(char),

    /// A `!` not immediately followed by a variable, or final in the expression.
    UnaryOperatorMismatch,

    /// A `)` without a matching `(`, or a `(` still open at the end of the expression.
    ParenthesisMismatch,
}

impl From<CompileError> for ErrorKind {
    fn from(e: CompileError) -> Self {
        ErrorKind::Compile(e)
    }
}

/// Noted errors while registering one rule, fact, or query line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleError {
    /// A character outside the grammar of the line kind.
    InvalidCharacters,

    /// A rule without exactly one implication operator between two non-empty sides, or whose sides do not reduce to a single expression.
    Structure,

    /// A `|` or `^` in the conclusion of a rule.
    /// Conjunctive conclusions are permitted, disjunctive and exclusive ones are not.
    RightSideOperator,

    /// A variable queried twice.
    DuplicateQuery(crate::structures::variable::Variable),
}

impl From<RuleError> for ErrorKind {
    fn from(e: RuleError) -> Self {
        ErrorKind::Rule(e)
    }
}

/// Noted errors in the aggregate content of a load, checked once over the whole sequence of lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// No rule line was present.
    MissingRules,

    /// No fact line was present.
    /// A run without known facts still requires an empty fact section.
    MissingFacts,

    /// No query line was present.
    MissingQueries,

    /// A line the categorizer could not classify.
    UnknownLineKind,
}

impl From<ValidationError> for ErrorKind {
    fn from(e: ValidationError) -> Self {
        ErrorKind::Validation(e)
    }
}
