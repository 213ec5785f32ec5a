use std::collections::HashSet;

use log::{debug, warn};

use crate::errors::{EmitError, ValidationError};
use crate::media::MediaGroup;
use crate::media_interval::MediaInterval;
use crate::manifest_writer;

// @module: Manifest model aggregation and validation

/// Handle to a media group appended to a [`ManifestModel`].
///
/// Handles are plain indices returned from each append call; the adapter
/// keeps the one it received last instead of the model tracking an implicit
/// "current" cursor. A handle is only meaningful for the model that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupHandle(usize);

/// Handle to a media interval appended to a [`ManifestModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalHandle(usize);

/// In-memory description of an adaptive media presentation.
///
/// The model is built up by appending groups and intervals in command order,
/// filling each through the handle returned by the append. Nothing is checked
/// eagerly: [`ManifestModel::validate`] is the single gate that resolves
/// cross-references and enforces the structural invariants, and only the
/// [`ValidatedManifest`] it returns can emit the manifest file.
#[derive(Debug, Clone, Default)]
pub struct ManifestModel {
    groups: Vec<MediaGroup>,
    intervals: Vec<MediaInterval>,
    output_filename: Option<String>,
}

impl ManifestModel {
    pub fn new() -> Self {
        ManifestModel::default()
    }

    /// Appends an empty media group and returns its handle
    pub fn add_media_group(&mut self) -> GroupHandle {
        self.groups.push(MediaGroup::new());
        debug!("added media group #{}", self.groups.len() - 1);
        GroupHandle(self.groups.len() - 1)
    }

    /// The group behind a handle issued by [`Self::add_media_group`]
    pub fn media_group_mut(&mut self, handle: GroupHandle) -> &mut MediaGroup {
        &mut self.groups[handle.0]
    }

    /// Appends an empty media interval and returns its handle
    pub fn add_media_interval(&mut self) -> IntervalHandle {
        self.intervals.push(MediaInterval::new());
        debug!("added media interval #{}", self.intervals.len() - 1);
        IntervalHandle(self.intervals.len() - 1)
    }

    /// The interval behind a handle issued by [`Self::add_media_interval`]
    pub fn media_interval_mut(&mut self, handle: IntervalHandle) -> &mut MediaInterval {
        &mut self.intervals[handle.0]
    }

    pub fn set_output_filename<S: Into<String>>(&mut self, filename: S) {
        self.output_filename = Some(filename.into());
    }

    pub fn output_filename(&self) -> Option<&str> {
        self.output_filename.as_deref()
    }

    /// Media groups in declaration order
    pub fn media_groups(&self) -> &[MediaGroup] {
        &self.groups
    }

    /// Media intervals in declaration order
    pub fn media_intervals(&self) -> &[MediaInterval] {
        &self.intervals
    }

    /// Validates the whole model and returns the emission token.
    ///
    /// Checks, in order: an output filename is set, at least one group and
    /// one interval exist, group ids are unique, media ids are unique within
    /// their group, interval times are non-negative, and every interval group
    /// reference resolves to a declared group. The first violation is
    /// returned; nothing is mutated, so calling this twice without touching
    /// the model gives the same result both times.
    pub fn validate(&self) -> Result<ValidatedManifest<'_>, ValidationError> {
        let output = match self.output_filename.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationError::MissingOutputFilename),
        };
        if self.groups.is_empty() {
            return Err(ValidationError::NoMediaGroups);
        }
        if self.intervals.is_empty() {
            return Err(ValidationError::NoMediaIntervals);
        }

        let mut group_ids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id.as_str()) {
                return Err(ValidationError::DuplicateGroupId {
                    id: group.id.clone(),
                });
            }
            if group.is_empty() {
                warn!("media group '{}' contains no media", group.id);
            }

            let mut media_ids = HashSet::new();
            for media in &group.media {
                if !media_ids.insert(media.id.as_str()) {
                    return Err(ValidationError::DuplicateMediaId {
                        group_id: group.id.clone(),
                        media_id: media.id.clone(),
                    });
                }
            }
        }

        for interval in &self.intervals {
            if interval.start < 0.0 {
                return Err(ValidationError::NegativeTime {
                    interval_id: interval.id.clone(),
                    field: "start",
                    value: interval.start,
                });
            }
            if interval.duration < 0.0 {
                return Err(ValidationError::NegativeTime {
                    interval_id: interval.id.clone(),
                    field: "duration",
                    value: interval.duration,
                });
            }
            for group_id in &interval.group_refs {
                if !group_ids.contains(group_id.as_str()) {
                    return Err(ValidationError::UnresolvedGroupReference {
                        interval_id: interval.id.clone(),
                        group_id: group_id.clone(),
                    });
                }
            }
        }

        debug!(
            "validated manifest model: {} group(s), {} interval(s) -> {}",
            self.groups.len(),
            self.intervals.len(),
            output
        );
        Ok(ValidatedManifest { model: self })
    }
}

/// Proof that a [`ManifestModel`] passed validation.
///
/// Borrows the model, so the model cannot be mutated for as long as the token
/// is alive; emission without a prior successful validation is therefore not
/// expressible.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedManifest<'a> {
    model: &'a ManifestModel,
}

impl ValidatedManifest<'_> {
    pub fn media_groups(&self) -> &[MediaGroup] {
        self.model.media_groups()
    }

    pub fn media_intervals(&self) -> &[MediaInterval] {
        self.model.media_intervals()
    }

    /// The output filename the model was validated with
    pub fn output_filename(&self) -> &str {
        // validate() rejected the model unless this was set and non-empty
        self.model.output_filename().unwrap_or_default()
    }

    /// Serializes the manifest document to its textual form.
    /// Identical model state always renders byte-identical output.
    pub fn render(&self) -> Result<String, EmitError> {
        manifest_writer::render(self)
    }

    /// Writes the manifest to the configured output filename
    pub fn emit(&self) -> Result<(), EmitError> {
        manifest_writer::emit(self)
    }
}
