use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::errors::EmitError;
use crate::manifest_model::ValidatedManifest;
use crate::media::MediaGroup;
use crate::media_interval::MediaInterval;

// @module: Manifest serialization and atomic file emission

/// Literal format tag written into every manifest
pub const MANIFEST_VERSION: &str = "1.0";

/// On-disk shape of the manifest document.
///
/// This is the external contract of the serializer: a pretty-printed JSON
/// object with a fixed field order (`version`, `media_groups`,
/// `media_intervals`), arrays in model declaration order, terminated by a
/// single newline. Downstream consumers parse exactly this layout.
#[derive(Serialize)]
struct ManifestDocument<'a> {
    version: &'static str,
    media_groups: &'a [MediaGroup],
    media_intervals: &'a [MediaInterval],
}

/// Serializes a validated model to the manifest text
pub fn render(manifest: &ValidatedManifest<'_>) -> Result<String, EmitError> {
    let document = ManifestDocument {
        version: MANIFEST_VERSION,
        media_groups: manifest.media_groups(),
        media_intervals: manifest.media_intervals(),
    };
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}

/// Writes the manifest text to the validated model's output filename.
///
/// The content goes to a temporary file in the destination directory first
/// and is renamed over the final path only once fully written, so a failed
/// emission never leaves a partial manifest behind.
pub fn emit(manifest: &ValidatedManifest<'_>) -> Result<(), EmitError> {
    let text = render(manifest)?;
    let output_path = Path::new(manifest.output_filename());
    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(output_dir)?;
    staged.write_all(text.as_bytes())?;
    staged.flush()?;
    staged.persist(output_path)?;

    info!(
        "wrote manifest {} ({} group(s), {} interval(s))",
        output_path.display(),
        manifest.media_groups().len(),
        manifest.media_intervals().len()
    );
    Ok(())
}
