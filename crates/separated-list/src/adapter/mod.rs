//! List adapters for Horizon-style list views.
//!
//! A list adapter answers a view's positional questions: how many rows there
//! are, what item sits at a position, whether it can be clicked, and how to
//! render it. The host owns the views, their recycling and input; adapters
//! only route those questions to the right data.
//!
//! # Core Types
//!
//! - `ListAdapter`: The capability every adapter implements
//! - `AdapterSignals`: `changed` / `invalidated` notifications
//! - `ViewContainer`: The host-side hooks adapters render rows through
//! - `ItemData`: Type-erased item returned for a position
//! - `RowTemplate`: Layout and text slot for single-line rows
//!
//! # Adapter Implementations
//!
//! - `ArrayAdapter`: A `Vec` of items rendered as text rows
//! - `SeparatedListAdapter`: Several adapters shown in sequence, each under
//!   a header row
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  changed   ┌──────────────────────┐  changed   ┌──────┐
//! │ ArrayAdapter │──────────> │ SeparatedListAdapter │──────────> │ View │
//! │  (section)   │            │  headers + sections  │            │      │
//! └──────────────┘ <───────── └──────────────────────┘ <───────── └──────┘
//!                  local index                        flat index
//! ```

mod array_adapter;
mod item;
mod separated;
mod template;
mod traits;

pub use array_adapter::{ArrayAdapter, DataExtractor, EnabledExtractor, ListItem};
pub use item::ItemData;
pub use separated::{FlatPosition, HEADER_ITEM_ID, HEADER_VIEW_TYPE, SeparatedListAdapter};
pub use template::{LayoutId, RowTemplate, SlotId};
pub use traits::{AdapterSignals, DataSetObserver, ListAdapter, ObserverRegistration, ViewContainer};
