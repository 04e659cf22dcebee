/*!
Configuration of a context.

All configuration for a context is fixed when the context is created.
The surface is small: resolution itself is deterministic by design, and the only policy left open is how thorough an explanation trace should be.
*/

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Evaluate every derivation of an entry when a trace is requested, rather than stopping at the first true.
    ///
    /// The disjunction is commutative and total, so the answered boolean is identical either way; only the completeness of the trace changes.
    /// Without a trace, resolution always stops at the first true derivation.
    pub exhaustive_explanations: bool,
}

impl Default for Config {
    /// The default configuration prefers complete traces over skipped work, as traces are requested for reading.
    fn default() -> Self {
        Config {
            exhaustive_explanations: true,
        }
    }
}
