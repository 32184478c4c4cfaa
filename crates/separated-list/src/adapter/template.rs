//! Row templates.
//!
//! A [`RowTemplate`] names the layout a text row is inflated from and the
//! slot inside that layout that receives the row's text. Both are opaque
//! identifiers owned by the host; adapters only pass them back to the
//! host's [`ViewContainer`](super::ViewContainer).
//!
//! Templates are plain configuration and can be stored as TOML:
//!
//! ```
//! use separated_list::adapter::{LayoutId, RowTemplate, SlotId};
//!
//! let template = RowTemplate::from_toml_str("layout = 7").unwrap();
//! assert_eq!(template.layout, LayoutId(7));
//! assert_eq!(template.text_slot, SlotId::TEXT);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AdapterResult;

/// Identifies a row layout known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub u32);

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies a text slot inside a row layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u32);

impl SlotId {
    /// The conventional primary text slot of a simple row layout.
    pub const TEXT: SlotId = SlotId(1);
}

impl Default for SlotId {
    fn default() -> Self {
        Self::TEXT
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The layout and text slot used to render a single line of text as a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowTemplate {
    /// Layout inflated for rows that have no recycled view.
    pub layout: LayoutId,
    /// Slot that receives the row text.
    #[serde(default)]
    pub text_slot: SlotId,
}

impl RowTemplate {
    /// Creates a template that binds text into [`SlotId::TEXT`].
    pub const fn new(layout: LayoutId) -> Self {
        Self {
            layout,
            text_slot: SlotId::TEXT,
        }
    }

    /// Creates a template with an explicit text slot.
    pub const fn with_text_slot(layout: LayoutId, text_slot: SlotId) -> Self {
        Self { layout, text_slot }
    }

    /// Parses a template from TOML.
    pub fn from_toml_str(source: &str) -> AdapterResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serializes the template to TOML.
    pub fn to_toml_string(&self) -> AdapterResult<String> {
        Ok(toml::to_string(self)?)
    }
}
