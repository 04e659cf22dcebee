/*!
Items related to [logging](log).

Calls to the log macro appear throughout the library, narrowed by target so output can be limited to the part of a run under investigation.

No log implementation is installed by the library.
For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [compiler](crate::compiler).
    pub const COMPILER: &str = "compiler";

    /// Logs related to [registration](crate::builder).
    pub const REGISTRY: &str = "registry";

    /// Logs related to the [definition table](crate::db::definition).
    pub const DEFINITION_DB: &str = "definition_db";

    /// Logs related to [resolution](crate::procedures).
    pub const SOLVE: &str = "solve";
}
