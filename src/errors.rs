/*!
 * Error types for the adaptive-manifest tool.
 *
 * This module contains custom error types for the three fatal failure paths
 * (directive handling, model validation, manifest emission), using the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced while dispatching command-line directives
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectiveError {
    /// Help was requested (`-h`/`-?`) or no directives were supplied
    #[error("usage requested")]
    UsageRequested,

    /// A directive that takes an option list was the last token on the line
    #[error("directive '{directive}' is missing its option value")]
    MissingValue {
        /// The directive flag as it appeared on the command line
        directive: String,
    },
}

/// Errors that can make a manifest model fail validation
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// No output filename was configured (`-o`)
    #[error("no output filename set")]
    MissingOutputFilename,

    /// The model holds no media groups
    #[error("manifest has no media groups")]
    NoMediaGroups,

    /// The model holds no media intervals
    #[error("manifest has no media intervals")]
    NoMediaIntervals,

    /// Two media groups share one id
    #[error("duplicate media group id '{id}'")]
    DuplicateGroupId {
        /// The colliding group id
        id: String,
    },

    /// Two media entries within one group share one id
    #[error("duplicate media id '{media_id}' in group '{group_id}'")]
    DuplicateMediaId {
        /// The owning group's id
        group_id: String,
        /// The colliding media id
        media_id: String,
    },

    /// An interval references a group id that was never declared
    #[error("interval '{interval_id}' references unknown group '{group_id}'")]
    UnresolvedGroupReference {
        /// The referencing interval's id
        interval_id: String,
        /// The unresolvable group id
        group_id: String,
    },

    /// An interval carries a negative start or duration
    #[error("interval '{interval_id}' has negative {field} ({value})")]
    NegativeTime {
        /// The offending interval's id
        interval_id: String,
        /// Which field was negative ("start" or "duration")
        field: &'static str,
        /// The rejected value in seconds
        value: f64,
    },
}

/// Errors that can occur while writing the manifest file
#[derive(Error, Debug)]
pub enum EmitError {
    /// The serialized document could not be produced
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file (or its temporary sibling) could not be written
    #[error("failed to write manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The finished temporary file could not be moved over the output path
    #[error("failed to finalize manifest file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
