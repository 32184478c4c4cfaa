//! Sectioned list adapters.
//!
//! `separated-list` composes several independent item lists into one flat,
//! scrollable list in which each non-empty list is introduced by a header
//! row. The host toolkit keeps ownership of rendering, view recycling and
//! input; the adapters here translate the host's flat positions into
//! (section, row) pairs and route each query to the right child.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use separated_list::adapter::{
//!     ArrayAdapter, LayoutId, ListAdapter, RowTemplate, SeparatedListAdapter, SlotId,
//!     ViewContainer,
//! };
//! use separated_list::AdapterResult;
//!
//! /// Renders every row as a plain string.
//! struct Lines;
//!
//! impl ViewContainer for Lines {
//!     type View = String;
//!
//!     fn inflate(&mut self, _layout: LayoutId) -> String {
//!         String::new()
//!     }
//!
//!     fn bind_text(&mut self, view: &mut String, _slot: SlotId, text: &str) -> AdapterResult<()> {
//!         view.replace_range(.., text);
//!         Ok(())
//!     }
//! }
//!
//! let row = RowTemplate::new(LayoutId(1));
//! let list = SeparatedListAdapter::<Lines>::new(LayoutId(2));
//! list.add_section("Vegetables", Arc::new(ArrayAdapter::new(row, vec!["leek", "kale"])))?;
//! list.add_section("Spices", Arc::new(ArrayAdapter::new(row, vec!["cumin"])))?;
//!
//! let mut lines = Lines;
//! let rendered: Vec<String> = (0..list.count())
//!     .filter_map(|position| list.view_for_item(position, None, &mut lines).transpose())
//!     .collect::<AdapterResult<_>>()?;
//! assert_eq!(rendered, ["Vegetables", "leek", "kale", "Spices", "cumin"]);
//! # Ok::<(), separated_list::AdapterError>(())
//! ```

pub mod adapter;
mod error;

pub use error::{AdapterError, AdapterResult};
