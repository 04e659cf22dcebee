/*!
The context --- to which rules, facts, and queries are added, and within which resolution takes place.

A context replaces the process-wide tables of a looser design with one explicit object constructed once per run and passed nowhere: every component is a method on, or a field of, the context.
Memoized evaluation state lives for exactly as long as its context.

# Example
```rust
use entail::builder::LineKind;
use entail::config::Config;
use entail::context::Context;

let mut the_context = Context::from_config(Config::default());

let lines = [
    (LineKind::Rule, "A + B => C"),
    (LineKind::Fact, "AB"),
    (LineKind::Query, "C"),
];

assert!(the_context.load_lines(lines).is_ok());

let (value, trace) = the_context.evaluate_query_explained('C');
assert!(value);
assert!(!trace.is_empty());
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{definition::DefinitionDB, node::NodeStore, query::QueryDB},
};

/// The context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The node store, holding every tree built during the run.
    pub nodes: NodeStore,

    /// The definition table.
    pub definitions: DefinitionDB,

    /// The query store.
    pub queries: QueryDB,

    /// Counters over the run.
    pub counters: Counters,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,

            nodes: NodeStore::default(),
            definitions: DefinitionDB::default(),
            queries: QueryDB::default(),

            counters: Counters::default(),
        }
    }
}
