use serde::Serialize;

// @module: Media renditions and their interchangeable groupings

// @struct: Single renditable asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Media {
    // @field: Identifier, unique within the owning group
    pub id: String,

    // @field: Path or URI of the underlying asset
    pub file: String,
}

impl Media {
    /// Creates an empty media entry, to be filled through the setters
    pub fn new() -> Self {
        Media::default()
    }

    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.id = id.into();
    }

    pub fn set_file<S: Into<String>>(&mut self, file: S) {
        self.file = file.into();
    }
}

// @struct: Ordered collection of interchangeable renditions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaGroup {
    // @field: Identifier, unique across the model
    pub id: String,

    // @field: Language/locale tag, may be empty
    pub lang: String,

    // @field: Owned renditions, in declaration order
    pub media: Vec<Media>,
}

impl MediaGroup {
    /// Creates an empty group, to be filled through the setters
    pub fn new() -> Self {
        MediaGroup::default()
    }

    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.id = id.into();
    }

    pub fn set_lang<S: Into<String>>(&mut self, lang: S) {
        self.lang = lang.into();
    }

    /// Appends a fresh media entry and returns it for immediate fill.
    /// The group owns the entry exclusively; declaration order is kept.
    pub fn add_media(&mut self) -> &mut Media {
        self.media.push(Media::new());
        let last = self.media.len() - 1;
        &mut self.media[last]
    }

    /// The most recently added media entry, or None for an empty group
    pub fn last_media(&mut self) -> Option<&mut Media> {
        self.media.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }
}
