/*!
Tools for building a context from categorized lines of rule text.

# Overview

The categorizer (external to the library --- the cli carries one) hands a context a sequence of `(kind, content)` pairs, and [load_lines](crate::context::Context::load_lines) makes a single all-or-nothing pass over them:

- A rule line is split on its implication operator, each side is [compiled](crate::compiler) and checked, and the condition is registered once per conclusion variable.
- A fact line records a constant-true derivation per listed variable.
- A query line appends its variables to the query store.
- Comments and empty lines are skipped; an unknown line fails the pass.

After the scan the aggregate content is checked: at least one rule line, one fact line (possibly empty), and one query line must have been present.
The first error encountered aborts the load, and a context whose load failed holds no rule set worth evaluating.

# Example

```rust
use entail::builder::LineKind;
use entail::config::Config;
use entail::context::Context;

let mut the_context = Context::from_config(Config::default());

let lines = [
    (LineKind::Rule, "A | B => C"),
    (LineKind::Comment, "the fact section follows"),
    (LineKind::Fact, "B"),
    (LineKind::Query, "C"),
];

let report = the_context.load_lines(lines).unwrap();
assert_eq!(report.rules, 1);
assert_eq!(report.queries, 1);
```
*/

mod lines;
mod rule;
mod tree;

/// The kind of a categorized line, decided outside the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// An implication rule.
    Rule,

    /// A fact section, `=` followed by the variables known true.
    Fact,

    /// A query section, `?` followed by the variables to resolve.
    Query,

    /// A comment line.
    Comment,

    /// A line with no content.
    Empty,

    /// A line the categorizer could not classify.
    Unknown,
}

/// Counts over a completed load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rule lines registered.
    pub rules: usize,

    /// Derivation trees built, one per conclusion variable per rule.
    pub derivations: usize,

    /// Fact lines read, including empty sections.
    pub facts: usize,

    /// Query lines read.
    pub queries: usize,
}
