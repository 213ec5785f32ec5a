use serde::Serialize;

// @module: Time-bounded presentation segments

/// A time segment of the presentation activating one or more media groups.
///
/// Group references are weak: they name groups by id and are only resolved
/// against the model's group table at validation time, so intervals may be
/// declared before or after the groups they reference. Duplicate references
/// are preserved verbatim, never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaInterval {
    // @field: Identifier of the interval
    pub id: String,

    // @field: Start time in seconds, expected >= 0
    pub start: f64,

    // @field: Duration in seconds, expected >= 0
    pub duration: f64,

    // @field: Referenced group ids, in declaration order
    #[serde(rename = "groups")]
    pub group_refs: Vec<String>,
}

impl MediaInterval {
    /// Creates an empty interval, to be filled through the setters
    pub fn new() -> Self {
        MediaInterval::default()
    }

    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.id = id.into();
    }

    pub fn set_start(&mut self, start: f64) {
        self.start = start;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Appends a group reference without checking that the group exists
    pub fn add_group_reference<S: Into<String>>(&mut self, group_id: S) {
        self.group_refs.push(group_id.into());
    }
}
