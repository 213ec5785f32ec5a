/*!
 * # adaptive-manifest
 *
 * A Rust prototyping tool for building adaptive media presentation manifests
 * from command-line directives.
 *
 * ## Features
 *
 * - Build groups of interchangeable media renditions (`-mg`, `-m`)
 * - Declare time intervals activating groups by id (`-mi`), in any order
 *   relative to the groups they reference
 * - Validate the whole model in a single pass (unique ids, resolvable
 *   references, required fields)
 * - Emit a deterministic JSON manifest atomically (`-o`)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `media`: `Media` renditions and their `MediaGroup` collections
 * - `media_interval`: time-bounded segments with weak group references
 * - `manifest_model`: model aggregation, handle-based construction and the
 *   single validation gate
 * - `manifest_writer`: the serialization contract and atomic file emission
 * - `directives`: the command-line adapter dispatching directives onto the
 *   model
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod directives;
pub mod errors;
pub mod manifest_model;
pub mod manifest_writer;
pub mod media;
pub mod media_interval;

// Re-export main types for easier usage
pub use errors::{DirectiveError, EmitError, ValidationError};
pub use manifest_model::{GroupHandle, IntervalHandle, ManifestModel, ValidatedManifest};
pub use media::{Media, MediaGroup};
pub use media_interval::MediaInterval;
