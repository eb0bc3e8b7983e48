/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when examining how a program was read or written.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading](crate::reader) a program.
    pub const READER: &str = "reader";

    /// Logs related to [writing](crate::writer) a program.
    pub const WRITER: &str = "writer";

    /// Logs related to the symbol section and [atom tables](crate::symbols).
    pub const SYMBOLS: &str = "symbols";

    /// Logs related to the conversion of pseudo-atoms to directives.
    pub const CONVERSION: &str = "conversion";

    /// Logs related to steps of an [incremental](crate::incremental) program.
    pub const STEP: &str = "step";
}
