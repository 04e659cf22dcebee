/// Counts kept over a run, for logs and curiosity rather than control flow.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of derivation trees registered, across all conclusion variables.
    pub derivations: usize,

    /// A count of resolutions answered from a memoized value.
    pub memo_hits: usize,

    /// A count of resolutions which re-entered an in-progress entry and were broken off as false.
    pub cycle_breaks: usize,
}
