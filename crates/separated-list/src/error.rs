//! Error types for separated-list.

use thiserror::Error;

use crate::adapter::{LayoutId, SlotId};

/// Errors that can occur while building or rendering a list adapter.
///
/// Out-of-range positions are not errors: positional queries answer them
/// with an empty result instead.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A section with this name has already been added.
    #[error("section {name:?} has already been added")]
    DuplicateSection { name: String },

    /// The inflated row layout has no text slot to bind into.
    #[error("layout {layout} has no text slot {slot}")]
    MissingTextSlot { layout: LayoutId, slot: SlotId },

    /// A row template could not be parsed.
    #[error("invalid row template: {0}")]
    InvalidTemplate(#[from] toml::de::Error),

    /// A row template could not be serialized.
    #[error("failed to serialize row template: {0}")]
    TemplateSerialization(#[from] toml::ser::Error),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
