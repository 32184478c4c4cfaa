//! Item data returned by list adapters.
//!
//! Each row of a list adapter exposes one item. Adapters hand items out as
//! [`ItemData`], a small type-erased container, so that a composed list can
//! return a section's name for a header row and a child's item for any other
//! row through the same call.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased container for item data.
///
/// `ItemData` provides type-safe access through the `as_*` methods and the
/// generic `downcast` method. `ItemData::None` is what adapters return for a
/// position that holds no item.
///
/// # Example
///
/// ```
/// use separated_list::adapter::ItemData;
///
/// // Create from a string
/// let data = ItemData::from("Hello");
/// assert_eq!(data.as_string(), Some("Hello"));
///
/// // Downcast to arbitrary type
/// let data = ItemData::new(42u32);
/// assert_eq!(data.downcast::<u32>(), Some(&42));
/// ```
#[derive(Clone, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
    /// Custom data (type-erased, shared).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Custom values compare by identity: two `Custom` items are equal only when
/// they share the same allocation.
impl PartialEq for ItemData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl ItemData {
    /// Creates new custom data from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to downcast custom data to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Renders the item as row text.
    ///
    /// Strings are used as-is and scalars use their `Display` form. `None`
    /// and custom data render as an empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::None | Self::Custom(_) => String::new(),
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Option<String>> for ItemData {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => Self::String(s),
            None => Self::None,
        }
    }
}
