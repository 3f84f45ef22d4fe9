//! Tree configuration.

/// Depth limit and split threshold shared by every node of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Nodes at this level never split.
    pub max_levels: u32,
    /// A node splits once it holds more than this many objects directly.
    pub max_objects: usize,
}

/// Default depth limit.
pub const DEFAULT_MAX_LEVELS: u32 = 8;
/// Default number of direct objects a node holds before splitting.
pub const DEFAULT_MAX_OBJECTS: usize = 2;

impl QuadTreeConfig {
    /// Creates a configuration with the given depth limit and split threshold.
    pub fn new(max_levels: u32, max_objects: usize) -> Self {
        Self { max_levels, max_objects }
    }

    /// Returns a copy with `max_levels` replaced.
    #[must_use]
    pub fn with_max_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Returns a copy with `max_objects` replaced.
    #[must_use]
    pub fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVELS, DEFAULT_MAX_OBJECTS)
    }
}
