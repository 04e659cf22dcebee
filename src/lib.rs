//! A library for resolving queries over propositional implication rules.
//!
//! entail takes a collection of implication rules over boolean variables, a collection of known facts, and a collection of queries, and determines the truth value of each queried variable by recursively resolving the rules able to produce it.
//!
//! Resolution is total: a variable nothing defines is false, and a variable whose definition cycles back on itself contributes false to the cycle, so every query terminates with a boolean.
//! Each resolved value is memoized for the life of a context, and a query may be asked to explain itself with a human-readable trace of the resolutions made.
//!
//! # Orientation
//!
//! The library is organised around a single core structure, the [context](crate::context::Context).
//!
//! A context is built from a [configuration](crate::config::Config) and loaded with categorized [lines](crate::builder::LineKind) of rule text.
//! Internally, loading and solving are viewed as manipulation of a handful of databases:
//! - Expression trees are stored as keyed nodes in a [node store](crate::db::node::NodeStore).
//! - The derivations of each variable are stored in a [definition table](crate::db::definition::DefinitionDB), one ordered list of trees per variable, read as their disjunction.
//! - Queries are stored, in declaration order, in a [query store](crate::db::query::QueryDB).
//!
//! Rule text passes through the [compiler](crate::compiler) to a postfix form, is checked, and is then [built](crate::builder) into trees whose leaves reference the definition table by name.
//! The [solve procedures](crate::procedures) walk those trees against the table.
//!
//! # Example
//!
//! ```rust
//! use entail::builder::LineKind;
//! use entail::config::Config;
//! use entail::context::Context;
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let lines = [
//!     (LineKind::Rule, "A | B => C"),
//!     (LineKind::Fact, "B"),
//!     (LineKind::Query, "C"),
//! ];
//!
//! assert!(the_context.load_lines(lines).is_ok());
//! assert!(the_context.evaluate_query('C'));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, narrowed by the targets listed in [misc::log].
//! No log implementation is installed by the library.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs of the registration pass can be filtered with `RUST_LOG=registry …`.

pub mod builder;
pub mod compiler;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
